use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use matchday_core::league::Error;
use matchday_core::storage::DateRange;

use crate::{
    error::ApiResult,
    extract::{AuthAdmin, AuthUser},
    models::{CreateFixture, FixtureListQuery, UpdateFixture},
    response,
    state::AppState,
};

/// Resolves the listing window, defaulting to [epoch, now].
fn listing_range(query: &FixtureListQuery) -> Result<DateRange, Error> {
    let default = DateRange::through(Utc::now());
    DateRange::new(
        query.start_date.unwrap_or(default.start),
        query.end_date.unwrap_or(default.end),
    )
    .map_err(|err| Error::Validation(err.to_string()))
}

/// Schedule a fixture (POST /api/v1/fixtures). Admin only.
pub async fn create_fixture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(payload): Json<CreateFixture>,
) -> ApiResult<Response> {
    let fixture = state.fixtures.create(payload).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "fixture created successfully",
        json!({ "fixture": fixture }),
    ))
}

/// Get a fixture by public id (GET /api/v1/fixtures/{id}).
pub async fn get_fixture(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let fixture = state.fixtures.get(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "fixture returned successfully",
        json!({ "fixture": fixture }),
    ))
}

/// List fixtures by status and kickoff range (GET /api/v1/fixtures).
pub async fn list_fixtures(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<FixtureListQuery>,
) -> ApiResult<Response> {
    let status = query.status_filter()?;
    let range = listing_range(&query)?;

    let listing = state
        .fixtures
        .list(status, range, query.page, query.limit)
        .await?;
    Ok(response::success(StatusCode::OK, "fixtures found", listing))
}

/// Update a fixture (PUT /api/v1/fixtures/{id}). Admin only.
pub async fn update_fixture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFixture>,
) -> ApiResult<Response> {
    let fixture = state.fixtures.update(id, payload).await?;
    Ok(response::success(
        StatusCode::OK,
        "Fixture updated successfully",
        json!({ "fixture": fixture }),
    ))
}

/// Delete a pending fixture (DELETE /api/v1/fixtures/{id}). Admin only.
pub async fn delete_fixture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    state.fixtures.delete(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "fixture deleted successfully",
        json!([]),
    ))
}

/// Admin-scoped fixture retrieval (GET /api/v1/admin/fixtures/{id}).
pub async fn admin_get_fixture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let fixture = state.fixtures.get(id).await?;
    Ok(response::success(
        StatusCode::OK,
        "fixture returned successfully",
        json!({ "fixture": fixture }),
    ))
}

/// Admin-scoped fixture listing (GET /api/v1/admin/fixtures).
pub async fn admin_list_fixtures(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<FixtureListQuery>,
) -> ApiResult<Response> {
    let status = query.status_filter()?;
    let range = listing_range(&query)?;

    let listing = state
        .fixtures
        .list(status, range, query.page, query.limit)
        .await?;
    Ok(response::success(StatusCode::OK, "fixtures found", listing))
}
