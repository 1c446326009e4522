pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API
        .route("/api/v1/render", post(handlers::handle_render))
        .route(
            "/api/v1/render/markdown",
            post(handlers::handle_render_markdown),
        )
        .route("/api/v1/render/html", post(handlers::handle_render_html))
        // Export API
        .route("/api/v1/export", post(handlers::handle_export))
        .with_state(state)
}
