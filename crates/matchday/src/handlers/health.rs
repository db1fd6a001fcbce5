use axum::{http::StatusCode, response::Response};
use serde_json::json;

use crate::response;

/// Liveness probe (GET /health).
pub async fn health() -> Response {
    response::success(
        StatusCode::OK,
        "Matchday API is up and running",
        json!([]),
    )
}
