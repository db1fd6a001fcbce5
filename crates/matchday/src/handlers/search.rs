use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use matchday_core::league::Error;

use crate::{error::ApiResult, models::SearchQuery, response, state::AppState};

/// Free-text search over teams and fixtures (GET /api/v1/search?q=...).
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Response> {
    let term = query
        .q
        .ok_or_else(|| Error::Validation("Please pass a search value".to_string()))?;

    let listing = state
        .search
        .search(&term, query.page, query.limit)
        .await?;
    Ok(response::success(
        StatusCode::OK,
        "search results returned",
        listing,
    ))
}
