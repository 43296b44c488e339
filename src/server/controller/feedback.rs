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
        feedback::{CreateFeedbackDto, FeedbackDto, FeedbackStatsDto, UpdateFeedbackDto},
    },
    server::{
        error::AppError,
        model::feedback::{CreateFeedbackParams, Feedback, FeedbackFilter, UpdateFeedbackParams},
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuery {
    pub customer_id: Option<i32>,
    #[serde(default)]
    pub unreviewed: bool,
}

/// Submit feedback on behalf of a customer.
///
/// # Returns
/// - `201 Created` - Stored feedback, unreviewed
/// - `400 Bad Request` - Empty comments, score outside 1..=5, or unknown customer
#[utoipa::path(
    post,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackDto),
        (status = 400, description = "Invalid feedback data or unknown customer", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let params = CreateFeedbackParams::from_dto(payload)?;

    let feedback = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

#[utoipa::path(
    get,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    params(
        ("customerId" = Option<i32>, Query, description = "Only feedback from this customer"),
        ("unreviewed" = Option<bool>, Query, description = "Only feedback not yet reviewed")
    ),
    responses(
        (status = 200, description = "Feedback, newest first", body = Vec<FeedbackDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let filter = FeedbackFilter {
        customer_id: query.customer_id,
        unreviewed: query.unreviewed,
    };
    let feedback = service.get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(feedback.into_iter().map(Feedback::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get feedback totals, the unreviewed count and average ratings overall and per
/// category. Averages are 0 when nothing has been rated.
#[utoipa::path(
    get,
    path = "/feedback/stats",
    tag = FEEDBACK_TAG,
    responses(
        (status = 200, description = "Feedback statistics", body = FeedbackStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = i32, Path, description = "Feedback ID")
    ),
    responses(
        (status = 200, description = "Feedback", body = FeedbackDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Update feedback, e.g. to mark it reviewed and attach a staff response.
#[utoipa::path(
    patch,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = i32, Path, description = "Feedback ID")
    ),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Feedback updated", body = FeedbackDto),
        (status = 400, description = "Invalid feedback data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let params = UpdateFeedbackParams::from_dto(payload)?;

    let feedback = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = i32, Path, description = "Feedback ID")
    ),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
