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
        asset::{
            AssetDto, AssetStatsDto, AssetStatusDto, AssetTypeDto, CreateAssetDto, UpdateAssetDto,
        },
    },
    server::{
        error::AppError,
        model::asset::{Asset, AssetFilter, CreateAssetParams, UpdateAssetParams},
        service::asset::AssetService,
        state::AppState,
    },
};

/// Tag for grouping asset endpoints in OpenAPI documentation
pub static ASSET_TAG: &str = "asset";

#[derive(Deserialize)]
pub struct AssetQuery {
    #[serde(rename = "type")]
    pub asset_type: Option<AssetTypeDto>,
    pub status: Option<AssetStatusDto>,
}

#[utoipa::path(
    post,
    path = "/assets",
    tag = ASSET_TAG,
    request_body = CreateAssetDto,
    responses(
        (status = 201, description = "Asset created", body = AssetDto),
        (status = 400, description = "Invalid asset data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let params = CreateAssetParams::from_dto(payload)?;

    let asset = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(asset.into_dto())))
}

/// List assets ordered by name.
#[utoipa::path(
    get,
    path = "/assets",
    tag = ASSET_TAG,
    params(
        ("type" = Option<AssetTypeDto>, Query, description = "Filter by asset type"),
        ("status" = Option<AssetStatusDto>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Assets", body = Vec<AssetDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let filter = AssetFilter {
        asset_type: query.asset_type.map(Into::into),
        status: query.status.map(Into::into),
    };
    let assets = service.get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(assets.into_iter().map(Asset::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/assets/stats",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Asset counts by type and status", body = AssetStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset", body = AssetDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let asset = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetDto,
    responses(
        (status = 200, description = "Asset updated", body = AssetDto),
        (status = 400, description = "Invalid asset data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    let params = UpdateAssetParams::from_dto(payload)?;

    let asset = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = ASSET_TAG,
    params(
        ("id" = i32, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AssetService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
