//! Timeout response shaping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::dto::response::ApiResponse;

/// Replaces the bare 408 from the timeout layer with the JSON envelope.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    warn!("Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ApiResponse::failure("Request timed out", "REQUEST_TIMEOUT")),
    )
        .into_response()
}
