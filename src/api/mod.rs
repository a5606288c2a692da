//! API Module
//!
//! HTTP handlers, bearer authentication and routing for the cache API.
//!
//! # Endpoints
//! - `GET /api/cache` - List keys with optional prefix and cursor
//! - `GET /api/cache/:key` - Retrieve a value by key
//! - `PUT /api/cache/:key` - Store a value with optional TTL
//! - `DELETE /api/cache/:key` - Delete a key
//! - `GET /openapi.json` - OpenAPI description
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
