//! API Handlers
//!
//! HTTP request handlers for the cache endpoints. Each handler validates its
//! input, makes the store calls and shapes the JSON response.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::models::{
    validate_key, ErrorResponse, HealthResponse, KeyResponse, ListQuery, ListResponse, PutRequest,
    ValueResponse,
};
use crate::store::KvStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Key-value store every endpoint talks to
    pub store: Arc<dyn KvStore>,
    /// Bearer secret checked by the auth middleware
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, api_token: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_token: api_token.into(),
        }
    }
}

fn path_key(path: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    let Path(key) = path.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    match validate_key(&key) {
        Some(error_msg) => Err(ApiError::Validation(error_msg)),
        None => Ok(key),
    }
}

/// Handler for GET /api/cache/:key
pub async fn get_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ValueResponse>> {
    let key = path_key(path)?;

    let value = state
        .store
        .get(&key)
        .await
        .map_err(ApiError::store("retrieve from cache"))?
        .ok_or(ApiError::NotFound)?;

    debug!(key = %key, "cache hit");
    Ok(Json(ValueResponse::new(value)))
}

/// Handler for PUT /api/cache/:key
///
/// Always overwrites whatever is stored under the key.
pub async fn put_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Json<PutRequest>, JsonRejection>,
) -> Result<Json<KeyResponse>> {
    let key = path_key(path)?;
    let Json(req) = body.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    state
        .store
        .put(&key, &req.value, req.expiration_ttl)
        .await
        .map_err(ApiError::store("store in cache"))?;

    info!(key = %key, ttl = ?req.expiration_ttl, "stored value");
    Ok(Json(KeyResponse::new(key)))
}

/// Handler for DELETE /api/cache/:key
///
/// Checks existence first so a missing key is reported as 404 instead of a
/// silent no-op. Check and delete are two separate store calls.
pub async fn delete_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<KeyResponse>> {
    let key = path_key(path)?;

    let exists = state
        .store
        .get(&key)
        .await
        .map_err(ApiError::store("delete from cache"))?
        .is_some();
    if !exists {
        return Err(ApiError::NotFound);
    }

    state
        .store
        .delete(&key)
        .await
        .map_err(ApiError::store("delete from cache"))?;

    info!(key = %key, "deleted value");
    Ok(Json(KeyResponse::new(key)))
}

/// Handler for GET /api/cache
pub async fn list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>> {
    let Query(query) = query.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let options = query.into_options().map_err(ApiError::Validation)?;

    let page = state
        .store
        .list(options)
        .await
        .map_err(ApiError::store("list keys from cache"))?;

    Ok(Json(ListResponse::new(page)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
