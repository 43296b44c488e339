use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CreateMaintenanceRecordDto, MaintenanceCostPredictionDto, MaintenanceRecordDto,
            MaintenanceStatsDto, MaintenanceStatusDto, UpdateMaintenanceRecordDto,
        },
    },
    server::{
        error::AppError,
        model::maintenance::{
            CreateMaintenanceRecordParams, MaintenanceFilter, MaintenanceRecord,
            UpdateMaintenanceRecordParams, DEFAULT_PREDICTION_MONTHS,
        },
        service::maintenance::MaintenanceService,
        state::AppState,
        util::parse::parse_months,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceQuery {
    pub asset_id: Option<i32>,
    pub status: Option<MaintenanceStatusDto>,
}

#[derive(Deserialize)]
pub struct PredictCostsQuery {
    pub months: Option<i64>,
}

fn into_dtos(records: Vec<MaintenanceRecord>) -> Vec<MaintenanceRecordDto> {
    records.into_iter().map(MaintenanceRecord::into_dto).collect()
}

/// Schedule maintenance.
///
/// At least one of `assetId` and `dockId` is required, and each given id must refer
/// to an existing record. Status defaults to SCHEDULED.
///
/// # Returns
/// - `201 Created` - The scheduled record
/// - `400 Bad Request` - Missing target, unknown asset or dock, or invalid data
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = CreateMaintenanceRecordDto,
    responses(
        (status = 201, description = "Maintenance scheduled", body = MaintenanceRecordDto),
        (status = 400, description = "Invalid maintenance data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaintenanceRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let params = CreateMaintenanceRecordParams::from_dto(payload)?;

    let record = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

#[utoipa::path(
    get,
    path = "/maintenance",
    tag = MAINTENANCE_TAG,
    params(
        ("assetId" = Option<i32>, Query, description = "Only records for this asset"),
        ("status" = Option<MaintenanceStatusDto>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Maintenance records, latest scheduled first", body = Vec<MaintenanceRecordDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_records(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let filter = MaintenanceFilter {
        asset_id: query.asset_id,
        status: query.status.map(Into::into),
    };
    let records = service.get_all(filter).await?;

    Ok((StatusCode::OK, Json(into_dtos(records))))
}

/// List SCHEDULED records dated after now, soonest first.
#[utoipa::path(
    get,
    path = "/maintenance/upcoming",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Upcoming maintenance", body = Vec<MaintenanceRecordDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_maintenance(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let records = service.upcoming().await?;

    Ok((StatusCode::OK, Json(into_dtos(records))))
}

/// List SCHEDULED records whose date has passed, oldest first.
#[utoipa::path(
    get,
    path = "/maintenance/overdue",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Overdue maintenance", body = Vec<MaintenanceRecordDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overdue_maintenance(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let records = service.overdue().await?;

    Ok((StatusCode::OK, Json(into_dtos(records))))
}

#[utoipa::path(
    get,
    path = "/maintenance/stats",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Maintenance statistics", body = MaintenanceStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Predict maintenance spend.
///
/// Sums the estimated cost of every record scheduled between now and `months` months
/// from now, whatever its status. Records without an estimate count as zero.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Horizon in months, 6 when omitted
///
/// # Returns
/// - `200 OK` - Estimated total and the records it covers
/// - `400 Bad Request` - Non-positive or out-of-range months
#[utoipa::path(
    get,
    path = "/maintenance/predict-costs",
    tag = MAINTENANCE_TAG,
    params(
        ("months" = Option<i64>, Query, description = "Horizon in months (default: 6)")
    ),
    responses(
        (status = 200, description = "Cost prediction", body = MaintenanceCostPredictionDto),
        (status = 400, description = "Invalid months value", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn predict_maintenance_costs(
    State(state): State<AppState>,
    Query(query): Query<PredictCostsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let months = parse_months(query.months, DEFAULT_PREDICTION_MONTHS)?;

    let service = MaintenanceService::new(&state.db);

    let prediction = service.predict_costs(months).await?;

    Ok((StatusCode::OK, Json(prediction.into_dto())))
}

#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = i32, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 200, description = "Maintenance record", body = MaintenanceRecordDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Maintenance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_record_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let record = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Update a maintenance record. Setting status to COMPLETED without a completion
/// date records the current time.
#[utoipa::path(
    patch,
    path = "/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = i32, Path, description = "Maintenance record ID")
    ),
    request_body = UpdateMaintenanceRecordDto,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceRecordDto),
        (status = 400, description = "Invalid maintenance data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Maintenance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMaintenanceRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let params = UpdateMaintenanceRecordParams::from_dto(payload)?;

    let record = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = i32, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 204, description = "Maintenance record deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Maintenance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maintenance_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
