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
        dock::{CreateDockDto, DockDto, DockSizeDto, DockStatsDto, DockStatusDto, UpdateDockDto},
    },
    server::{
        error::AppError,
        model::dock::{CreateDockParams, Dock, DockFilter, UpdateDockParams},
        service::dock::DockService,
        state::AppState,
    },
};

/// Tag for grouping dock endpoints in OpenAPI documentation
pub static DOCK_TAG: &str = "dock";

#[derive(Deserialize)]
pub struct DockQuery {
    #[serde(default)]
    pub available: bool,
    pub status: Option<DockStatusDto>,
    pub size: Option<DockSizeDto>,
}

impl DockQuery {
    fn into_filter(self) -> DockFilter {
        DockFilter {
            available: self.available,
            status: self.status.map(Into::into),
            size: self.size.map(Into::into),
        }
    }
}

/// Create a dock.
///
/// # Returns
/// - `201 Created` - The created dock
/// - `400 Bad Request` - Invalid dock data
/// - `409 Conflict` - Dock number already in use
#[utoipa::path(
    post,
    path = "/docks",
    tag = DOCK_TAG,
    request_body = CreateDockDto,
    responses(
        (status = 201, description = "Dock created", body = DockDto),
        (status = 400, description = "Invalid dock data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Dock number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dock(
    State(state): State<AppState>,
    Json(payload): Json<CreateDockDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    let params = CreateDockParams::from_dto(payload)?;

    let dock = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(dock.into_dto())))
}

/// List docks ordered by dock number.
///
/// `available=true` restricts the listing to AVAILABLE docks and takes precedence
/// over `status`.
#[utoipa::path(
    get,
    path = "/docks",
    tag = DOCK_TAG,
    params(
        ("available" = Option<bool>, Query, description = "Only available docks"),
        ("status" = Option<DockStatusDto>, Query, description = "Filter by status"),
        ("size" = Option<DockSizeDto>, Query, description = "Filter by size")
    ),
    responses(
        (status = 200, description = "Docks", body = Vec<DockDto>),
        (status = 400, description = "Unknown status or size", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_docks(
    State(state): State<AppState>,
    Query(query): Query<DockQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    let docks = service.get_all(query.into_filter()).await?;

    Ok((
        StatusCode::OK,
        Json(docks.into_iter().map(Dock::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/docks/stats",
    tag = DOCK_TAG,
    responses(
        (status = 200, description = "Dock counts by status and size", body = DockStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dock_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/docks/{id}",
    tag = DOCK_TAG,
    params(
        ("id" = i32, Path, description = "Dock ID")
    ),
    responses(
        (status = 200, description = "Dock", body = DockDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Dock not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dock_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    let dock = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dock.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/docks/{id}",
    tag = DOCK_TAG,
    params(
        ("id" = i32, Path, description = "Dock ID")
    ),
    request_body = UpdateDockDto,
    responses(
        (status = 200, description = "Dock updated", body = DockDto),
        (status = 400, description = "Invalid dock data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Dock not found", body = ErrorDto),
        (status = 409, description = "Dock number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDockDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    let params = UpdateDockParams::from_dto(payload)?;

    let dock = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(dock.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/docks/{id}",
    tag = DOCK_TAG,
    params(
        ("id" = i32, Path, description = "Dock ID")
    ),
    responses(
        (status = 204, description = "Dock deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Dock not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DockService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
