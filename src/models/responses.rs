//! Response DTOs for the cache API
//!
//! Every body carries a `success` flag; failures use [`ErrorResponse`].

use serde::Serialize;
use serde_json::Value;

use crate::store::ListPage;

/// Response body for GET /api/cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct ValueResponse {
    pub success: bool,
    /// The decoded stored value
    pub result: Value,
}

impl ValueResponse {
    pub fn new(result: Value) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Response body for PUT and DELETE on /api/cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    pub success: bool,
    /// The key that was written or removed
    pub key: String,
}

impl KeyResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            success: true,
            key: key.into(),
        }
    }
}

/// Response body for GET /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub result: ListPage,
}

impl ListResponse {
    /// Wraps a page, dropping any cursor a complete page may carry.
    pub fn new(mut page: ListPage) -> Self {
        if page.list_complete {
            page.cursor = None;
        }
        Self {
            success: true,
            result: page,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
