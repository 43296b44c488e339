use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token does not match the configured API token.
    #[error("Invalid bearer token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with a `WWW-Authenticate: Bearer` header.
/// The specific reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(axum::http::header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
