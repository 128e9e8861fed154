//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status_page))
        .route("/placeholder/:slug", get(handlers::placeholder))
        // Partials swapped into pages by the frontend
        .route("/partials/last-sync", get(handlers::last_sync))
        .route("/partials/baseline-rows", get(handlers::baseline_rows))
        .route("/partials/status-cards", get(handlers::status_cards))
        // JSON API
        .route("/api/health", get(handlers::health))
        .route("/api/echo", post(handlers::echo))
        // Built frontend bundle and other static files
        .nest_service("/static", ServeDir::new(state.settings.static_dir.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
