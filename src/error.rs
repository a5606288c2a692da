//! Error types for the cache API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures raised by a key-value store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Value could not be encoded or decoded as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Continuation token was not produced by this store
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    /// Underlying storage or transport failure
    #[error("{0}")]
    Backend(String),
}

// == API Error Enum ==
/// Every way a cache API request can fail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or invalid bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Key absent on Get or Delete
    #[error("Key not found in cache")]
    NotFound,

    /// Malformed path, query or body
    #[error("{0}")]
    Validation(String),

    /// Store failure while performing `action`
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wraps a store failure with the action that was being attempted.
    pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| {
            tracing::error!(action, error = %source, "store operation failed");
            ApiError::Store { action, source }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        if matches!(self, ApiError::Unauthorized) {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}

// == Config Error Enum ==
/// Startup configuration problems.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
