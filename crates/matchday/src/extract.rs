//! Axum extractors for bearer-token authentication.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{
    error::ApiError,
    services::{Claims, TokenScope},
    state::AppState,
};

/// Claims of any authenticated caller (user or admin scope).
pub struct AuthUser(pub Claims);

/// Claims of an authenticated admin.
pub struct AuthAdmin(pub Claims);

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.auth.verify(token, TokenScope::User)?;
        Ok(AuthUser(claims))
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.auth.verify(token, TokenScope::Admin)?;
        Ok(AuthAdmin(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_bearer_token_extracts_value() {
        let parts = parts_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let parts = parts_with_header(None);
        assert!(bearer_token(&parts).is_err());
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        let parts = parts_with_header(Some("Basic dXNlcjpwYXNz"));
        assert!(bearer_token(&parts).is_err());
    }
}
