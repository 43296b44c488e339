use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        analytics::{
            CustomerInsightsDto, DashboardOverviewDto, MaintenanceAnalyticsDto, OccupancyDto,
            RevenueAnalyticsDto, ServiceAnalyticsDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::analytics::RevenueRange,
        service::analytics::AnalyticsService,
        state::AppState,
        util::parse::{parse_months, parse_optional_date_param},
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Default look-back for maintenance analytics, in months.
const DEFAULT_MAINTENANCE_MONTHS: u32 = 12;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Deserialize)]
pub struct MonthsQuery {
    pub months: Option<i64>,
}

/// Get the dashboard overview.
///
/// Returns headline counts (customers, active visits, pending requests, unreviewed
/// feedback, docks) together with a change indicator comparing each figure against
/// the state 30 days earlier.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Dashboard overview
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/dashboard",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardOverviewDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AnalyticsService::new(&state.db);

    let overview = service.dashboard_overview().await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Get revenue totals for visits checked in within an optional date range.
///
/// Dates accept RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC). Both
/// bounds are inclusive and either may be omitted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `startDate` and `endDate`
///
/// # Returns
/// - `200 OK` - Total revenue, visit count and average per visit
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/revenue",
    tag = ANALYTICS_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "Inclusive lower bound on check-in time"),
        ("endDate" = Option<String>, Query, description = "Inclusive upper bound on check-in time")
    ),
    responses(
        (status = 200, description = "Revenue summary", body = RevenueAnalyticsDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    Query(query): Query<RevenueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = RevenueRange {
        start: parse_optional_date_param("startDate", query.start_date.as_deref())?,
        end: parse_optional_date_param("endDate", query.end_date.as_deref())?,
    };

    let service = AnalyticsService::new(&state.db);

    let revenue = service.revenue(range).await?;

    Ok((StatusCode::OK, Json(revenue.into_dto())))
}

/// Get membership distribution and the top customers by visit count.
///
/// # Returns
/// - `200 OK` - Customer insights
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/customers",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Customer insights", body = CustomerInsightsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_insights(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnalyticsService::new(&state.db);

    let insights = service.customer_insights().await?;

    Ok((StatusCode::OK, Json(insights.into_dto())))
}

/// Get service request counts by type and by status.
///
/// # Returns
/// - `200 OK` - Service analytics
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/services",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Service analytics", body = ServiceAnalyticsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_analytics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnalyticsService::new(&state.db);

    let analytics = service.service_analytics().await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

/// Get completed maintenance by type and monthly spending.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Look-back in months, 12 when omitted
///
/// # Returns
/// - `200 OK` - Maintenance analytics
/// - `400 Bad Request` - Non-positive or out-of-range months
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/maintenance",
    tag = ANALYTICS_TAG,
    params(
        ("months" = Option<i64>, Query, description = "Look-back window in months (default: 12)")
    ),
    responses(
        (status = 200, description = "Maintenance analytics", body = MaintenanceAnalyticsDto),
        (status = 400, description = "Invalid months value", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_analytics(
    State(state): State<AppState>,
    Query(query): Query<MonthsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let months = parse_months(query.months, DEFAULT_MAINTENANCE_MONTHS)?;

    let service = AnalyticsService::new(&state.db);

    let analytics = service.maintenance_analytics(months).await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

/// Get current dock occupancy.
///
/// A dock counts as occupied when its status is OCCUPIED or an active visit names its
/// dock number. The rate is taken over docks not under maintenance or out of service.
///
/// # Returns
/// - `200 OK` - Occupancy figures
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/analytics/occupancy",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Dock occupancy", body = OccupancyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occupancy(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AnalyticsService::new(&state.db);

    let occupancy = service.occupancy().await?;

    Ok((StatusCode::OK, Json(occupancy.into_dto())))
}
