//! API Routes
//!
//! Configures the Axum router with all cache API endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::require_bearer;
use super::handlers::{
    delete_handler, get_handler, health_handler, list_handler, not_found_handler, put_handler,
    AppState,
};
use super::openapi::openapi_handler;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/cache` - List keys (bearer auth)
/// - `GET /api/cache/:key` - Retrieve a value (bearer auth)
/// - `PUT /api/cache/:key` - Store a value (bearer auth)
/// - `DELETE /api/cache/:key` - Delete a value (bearer auth)
/// - `GET /openapi.json` - API description
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Bearer auth on everything under `/api`
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/cache", get(list_handler))
        .route(
            "/cache/:key",
            get(get_handler).put(put_handler).delete(delete_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(openapi_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
