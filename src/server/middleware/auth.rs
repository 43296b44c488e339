use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Verifies the `Authorization: Bearer <token>` header against the configured token.
pub struct AuthGuard<'a> {
    expected: Option<&'a str>,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(expected: Option<&'a str>, headers: &'a HeaderMap) -> Self {
        Self { expected, headers }
    }

    /// Succeeds when no token is configured or the presented token matches.
    ///
    /// # Returns
    /// - `Ok(())` - Request may proceed
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer credentials present
    /// - `Err(AppError::AuthErr(InvalidToken))` - Credentials present but wrong
    pub fn require(&self) -> Result<(), AppError> {
        let Some(expected) = self.expected else {
            return Ok(());
        };

        let Some(presented) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Err(AuthError::MissingToken.into());
        };

        if !constant_time_eq(presented.trim().as_bytes(), expected.as_bytes()) {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(())
    }
}

/// Axum middleware rejecting requests that fail `AuthGuard::require`.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    AuthGuard::new(state.api_token.as_deref(), request.headers()).require()?;

    Ok(next.run(request).await)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn allows_everything_without_configured_token() {
        let headers = HeaderMap::new();
        assert!(AuthGuard::new(None, &headers).require().is_ok());
    }

    #[test]
    fn accepts_matching_token() {
        let headers = headers_with("Bearer s3cret");
        assert!(AuthGuard::new(Some("s3cret"), &headers).require().is_ok());
    }

    #[test]
    fn rejects_missing_header() {
        let headers = HeaderMap::new();
        let result = AuthGuard::new(Some("s3cret"), &headers).require();
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    #[test]
    fn rejects_wrong_token_and_wrong_scheme() {
        let wrong = headers_with("Bearer nope");
        assert!(matches!(
            AuthGuard::new(Some("s3cret"), &wrong).require(),
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));

        let basic = headers_with("Basic s3cret");
        assert!(matches!(
            AuthGuard::new(Some("s3cret"), &basic).require(),
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }
}
