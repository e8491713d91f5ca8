//! Route definitions for the FolderTree HTTP API.
//!
//! Folder routes are mounted under `/api`; the liveness check sits at
//! `/check`. Unknown paths and unsupported methods get a JSON 404, and
//! timed-out requests a JSON 408.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", folder_routes())
        .route("/check", get(handlers::health::check))
        .fallback(handlers::health::route_not_found)
        .method_not_allowed_fallback(handlers::health::route_not_found)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(axum_middleware::map_response(
            middleware::timeout::timeout_envelope,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Folder tree listing, creation, and subtree deletion
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::get_tree).post(handlers::folder::create_folder),
        )
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
        .method_not_allowed_fallback(handlers::health::route_not_found)
}
