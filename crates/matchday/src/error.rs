use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

use matchday_core::league::Error;

use crate::response;

/// HTTP-facing error type.
///
/// Wraps the core error taxonomy and adds the one failure class the
/// core never produces: a rejected bearer token.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error(transparent)]
    League(#[from] Error),
    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }
}

/// Result type for request handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::League(err) => {
                if let Error::Dependency(ref message) = err {
                    tracing::error!(error = %message, "Dependency failure");
                }
                let code = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                response::error(code, &err.to_string())
            }
            ApiError::Unauthorized(message) => {
                response::error(StatusCode::UNAUTHORIZED, &message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_errors_keep_their_status() {
        let err: ApiError = Error::NotFound("no fixture found".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let err: ApiError = Error::Conflict("team already exists".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_is_401() {
        let response = ApiError::unauthorized("invalid token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_display_passes_core_message_through() {
        let err: ApiError = Error::Conflict("team already exists".into()).into();
        assert_eq!(err.to_string(), "team already exists");
    }
}
