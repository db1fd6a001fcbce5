use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::ApiResult,
    extract::{AuthAdmin, AuthUser},
    models::{CreateTeam, PageQuery, UpdateTeam},
    response,
    state::AppState,
};

/// Register a new team (POST /api/v1/teams). Admin only.
pub async fn create_team(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(payload): Json<CreateTeam>,
) -> ApiResult<Response> {
    payload.validate()?;
    let team = payload.into_team().with_created_by(admin.0.sub);

    let team = state.teams.create(team).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Team created successfully",
        json!({ "team": team }),
    ))
}

/// Get a team by public id (GET /api/v1/teams/{id}).
pub async fn get_team(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let team = state.teams.get(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "team found",
        json!({ "team": team }),
    ))
}

/// List all teams (GET /api/v1/teams).
pub async fn list_teams(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Response> {
    let listing = state.teams.list(query.page, query.limit).await?;
    Ok(response::success(StatusCode::OK, "teams found", listing))
}

/// Update a team (PUT /api/v1/teams/{id}). Admin only.
pub async fn update_team(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTeam>,
) -> ApiResult<Response> {
    let team = state.teams.update(id, payload).await?;
    Ok(response::success(
        StatusCode::OK,
        "team updated successfully",
        json!({ "team": team }),
    ))
}

/// Delete a team (DELETE /api/v1/teams/{id}). Admin only.
pub async fn delete_team(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    state.teams.delete(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "team deleted successfully",
        json!([]),
    ))
}

/// Admin-scoped team retrieval (GET /api/v1/admin/teams/{id}).
pub async fn admin_get_team(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let team = state.teams.get(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "team found",
        json!({ "team": team }),
    ))
}

/// Admin-scoped team listing (GET /api/v1/admin/teams).
pub async fn admin_list_teams(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<PageQuery>,
) -> ApiResult<Response> {
    let listing = state.teams.list(query.page, query.limit).await?;
    Ok(response::success(StatusCode::OK, "teams found", listing))
}
