//! Bearer Authentication
//!
//! Middleware that rejects any request whose `Authorization` header does not
//! carry the configured bearer token. Runs before extraction, so a rejected
//! request never reaches the store.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::handlers::AppState;
use crate::error::ApiError;

/// Authentication middleware for the `/api` routes.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token);

    let authorized = matches!(
        token,
        Some(token) if tokens_match(token.as_bytes(), state.api_token.as_bytes())
    );
    if authorized {
        return Ok(next.run(request).await);
    }

    if token.is_some() {
        warn!(path = %request.uri().path(), "rejected request with invalid bearer token");
    } else {
        warn!(path = %request.uri().path(), "rejected request without bearer token");
    }
    Err(ApiError::Unauthorized)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Compares two tokens without short-circuiting on the first differing byte.
fn tokens_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
