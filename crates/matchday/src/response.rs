//! The service's uniform response envelope.
//!
//! Every endpoint answers with the same JSON shape: successes carry
//! `{"error":false,"code":…,"message":…,"data":…}` and failures carry
//! `{"error":true,"code":…,"message":…}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Builds a success response with the given status, message and data.
pub fn success<T: Serialize>(code: StatusCode, message: &str, data: T) -> Response {
    (
        code,
        Json(json!({
            "error": false,
            "code": code.as_u16(),
            "message": message,
            "data": data,
        })),
    )
        .into_response()
}

/// Builds an error response with the given status and message.
pub fn error(code: StatusCode, message: &str) -> Response {
    (
        code,
        Json(json!({
            "error": true,
            "code": code.as_u16(),
            "message": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let response = success(StatusCode::CREATED, "team created successfully", json!({"x": 1}));
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["error"], false);
        assert_eq!(json["code"], 201);
        assert_eq!(json["message"], "team created successfully");
        assert_eq!(json["data"]["x"], 1);
    }

    #[tokio::test]
    async fn test_error_envelope_has_no_data() {
        let response = error(StatusCode::NOT_FOUND, "team not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], true);
        assert_eq!(json["code"], 404);
        assert!(json.get("data").is_none());
    }
}
