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
        service_request::{
            CreateServiceRequestDto, ServiceRequestDto, ServiceRequestStatusDto,
            UpdateServiceRequestDto,
        },
    },
    server::{
        error::AppError,
        model::service_request::{
            CreateServiceRequestParams, ServiceRequest, UpdateServiceRequestParams,
        },
        service::service_request::ServiceRequestService,
        state::AppState,
    },
};

/// Tag for grouping service request endpoints in OpenAPI documentation
pub static SERVICE_REQUEST_TAG: &str = "service-request";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestQuery {
    pub customer_id: Option<i32>,
    pub status: Option<ServiceRequestStatusDto>,
}

/// Open a service request.
///
/// Status defaults to PENDING and priority to MEDIUM.
///
/// # Returns
/// - `201 Created` - The created request
/// - `400 Bad Request` - Invalid request data or unknown customer
#[utoipa::path(
    post,
    path = "/service-requests",
    tag = SERVICE_REQUEST_TAG,
    request_body = CreateServiceRequestDto,
    responses(
        (status = 201, description = "Service request created", body = ServiceRequestDto),
        (status = 400, description = "Invalid request data or unknown customer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceRequestService::new(&state.db);

    let params = CreateServiceRequestParams::from_dto(payload)?;

    let request = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

#[utoipa::path(
    get,
    path = "/service-requests",
    tag = SERVICE_REQUEST_TAG,
    params(
        ("customerId" = Option<i32>, Query, description = "Only requests by this customer"),
        ("status" = Option<ServiceRequestStatusDto>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Service requests, newest first", body = Vec<ServiceRequestDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_requests(
    State(state): State<AppState>,
    Query(query): Query<ServiceRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceRequestService::new(&state.db);

    let requests = service
        .get_all(query.customer_id, query.status.map(Into::into))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(ServiceRequest::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/service-requests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Service request ID")
    ),
    responses(
        (status = 200, description = "Service request", body = ServiceRequestDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_request_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceRequestService::new(&state.db);

    let request = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Update a service request. Setting status to COMPLETED without a completion date
/// records the current time.
#[utoipa::path(
    patch,
    path = "/service-requests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Service request ID")
    ),
    request_body = UpdateServiceRequestDto,
    responses(
        (status = 200, description = "Service request updated", body = ServiceRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceRequestService::new(&state.db);

    let params = UpdateServiceRequestParams::from_dto(payload)?;

    let request = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/service-requests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Service request ID")
    ),
    responses(
        (status = 204, description = "Service request deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceRequestService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
