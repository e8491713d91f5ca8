//! Liveness and fallback handlers.

use axum::Json;
use axum::http::StatusCode;

use crate::dto::response::ApiResponse;

/// GET /check
pub async fn check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("Server is running"))
}

/// Any route or method that is not registered.
pub async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Route not found", "NOT_FOUND")),
    )
}
