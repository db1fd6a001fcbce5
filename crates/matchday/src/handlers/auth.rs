use axum::{extract::State, http::StatusCode, response::Response, Json};
use serde_json::json;

use crate::{
    error::ApiResult,
    models::{Credentials, RegisterAdmin, RegisterUser},
    response,
    state::AppState,
};

/// Register a user (POST /api/v1/register).
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> ApiResult<Response> {
    let (user, token) = state.auth.register_user(payload).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "User created successfully",
        json!({ "user": user, "token": token }),
    ))
}

/// Log a user in (POST /api/v1/login).
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> ApiResult<Response> {
    let (user, token) = state.auth.login_user(payload).await?;
    Ok(response::success(
        StatusCode::OK,
        "User login successful",
        json!({ "user": user, "token": token }),
    ))
}

/// Register an admin (POST /api/v1/admin/register).
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAdmin>,
) -> ApiResult<Response> {
    let (admin, token) = state.auth.register_admin(payload).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Admin created successfully",
        json!({ "admin": admin, "token": token }),
    ))
}

/// Log an admin in (POST /api/v1/admin/login).
pub async fn login_admin(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> ApiResult<Response> {
    let (admin, token) = state.auth.login_admin(payload).await?;
    Ok(response::success(
        StatusCode::OK,
        "Admin login successful",
        json!({ "user": admin, "token": token }),
    ))
}
