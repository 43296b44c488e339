use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        visit::{CreateVisitDto, UpdateVisitDto, VisitDto},
    },
    server::{
        error::AppError,
        model::visit::{CreateVisitParams, UpdateVisitParams, Visit},
        service::visit::VisitService,
        state::AppState,
    },
};

/// Tag for grouping visit endpoints in OpenAPI documentation
pub static VISIT_TAG: &str = "visit";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitQuery {
    pub customer_id: Option<i32>,
}

fn into_dtos(visits: Vec<Visit>) -> Vec<VisitDto> {
    visits.into_iter().map(Visit::into_dto).collect()
}

/// Record a visit.
///
/// Check-in time defaults to now when omitted.
///
/// # Returns
/// - `201 Created` - The recorded visit
/// - `400 Bad Request` - Invalid visit data or unknown customer
#[utoipa::path(
    post,
    path = "/visits",
    tag = VISIT_TAG,
    request_body = CreateVisitDto,
    responses(
        (status = 201, description = "Visit recorded", body = VisitDto),
        (status = 400, description = "Invalid visit data or unknown customer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<CreateVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let params = CreateVisitParams::from_dto(payload, Utc::now())?;

    let visit = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(visit.into_dto())))
}

#[utoipa::path(
    get,
    path = "/visits",
    tag = VISIT_TAG,
    params(
        ("customerId" = Option<i32>, Query, description = "Only visits by this customer")
    ),
    responses(
        (status = 200, description = "Visits, newest check-in first", body = Vec<VisitDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visits(
    State(state): State<AppState>,
    Query(query): Query<VisitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let visits = service.get_all(query.customer_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(visits))))
}

/// List visits that have not checked out, newest check-in first.
#[utoipa::path(
    get,
    path = "/visits/current",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "Active visits", body = Vec<VisitDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_visits(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let visits = service.get_current().await?;

    Ok((StatusCode::OK, Json(into_dtos(visits))))
}

#[utoipa::path(
    get,
    path = "/visits/{id}",
    tag = VISIT_TAG,
    params(
        ("id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "Visit", body = VisitDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let visit = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(visit.into_dto())))
}

/// Update a visit, typically to check it out.
///
/// # Returns
/// - `200 OK` - The updated visit
/// - `400 Bad Request` - Check-out before check-in or negative charges
/// - `404 Not Found` - Visit does not exist
#[utoipa::path(
    patch,
    path = "/visits/{id}",
    tag = VISIT_TAG,
    params(
        ("id" = i32, Path, description = "Visit ID")
    ),
    request_body = UpdateVisitDto,
    responses(
        (status = 200, description = "Visit updated", body = VisitDto),
        (status = 400, description = "Invalid visit data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    let params = UpdateVisitParams::from_dto(payload)?;

    let visit = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(visit.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/visits/{id}",
    tag = VISIT_TAG,
    params(
        ("id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 204, description = "Visit deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VisitService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
