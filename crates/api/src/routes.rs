//! API route definitions

use crate::handlers;
use crate::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Create the main application router
pub fn create_router(state: SharedState, static_dir: Option<PathBuf>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users/{login}", get(handlers::get_user_dashboard))
        .route("/users/{login}/score", get(handlers::get_user_score))
        .route(
            "/users/{login}/achievements",
            get(handlers::get_user_achievements),
        )
        .route("/users/{login}/streak", get(handlers::get_user_streak))
        .route("/users/{login}/languages", get(handlers::get_user_languages))
        .route("/users/{login}/activity", get(handlers::get_user_activity))
        .route("/users/{login}/growth", get(handlers::get_user_growth))
        .route("/streak", post(handlers::compute_streak))
        .route("/compare", get(handlers::compare_users))
        .route("/global", get(handlers::get_global_dashboard))
        .route("/trending", get(handlers::get_trending))
        .route("/languages", get(handlers::get_global_languages))
        .route("/repos/{owner}/{repo}", get(handlers::get_repo_detail))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(CompressionLayer::new());

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    app
}
