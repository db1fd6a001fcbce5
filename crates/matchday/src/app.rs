use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::{login, login_admin, register, register_admin},
        fixtures::{
            admin_get_fixture, admin_list_fixtures, create_fixture, delete_fixture, get_fixture,
            list_fixtures, update_fixture,
        },
        health::health,
        search::search,
        teams::{
            admin_get_team, admin_list_teams, create_team, delete_team, get_team, list_teams,
            update_team,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // API routes with CORS
    let api_routes = Router::new()
        // Account routes
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/admin/register", post(register_admin))
        .route("/admin/login", post(login_admin))
        // Admin-scoped reads
        .route("/admin/teams", get(admin_list_teams))
        .route("/admin/teams/{id}", get(admin_get_team))
        .route("/admin/fixtures", get(admin_list_fixtures))
        .route("/admin/fixtures/{id}", get(admin_get_fixture))
        // Team routes
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        // Fixture routes
        .route("/fixtures", get(list_fixtures).post(create_fixture))
        .route(
            "/fixtures/{id}",
            get(get_fixture).put(update_fixture).delete(delete_fixture),
        )
        // Search
        .route("/search", get(search))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
