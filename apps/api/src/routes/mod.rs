pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::functions;
use crate::generation::handlers as generation;
use crate::history::handlers as history;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content tasks (demo fallback, persisted)
        .route("/api/v1/posts/generate", post(generation::handle_generate_posts))
        .route("/api/v1/posts/analyze", post(generation::handle_analyze_post))
        .route(
            "/api/v1/profile/optimize",
            post(generation::handle_optimize_profile),
        )
        .route(
            "/api/v1/profile/optimizations",
            get(history::handle_list_optimizations),
        )
        // History and dashboard
        .route("/api/v1/history", get(history::handle_list_history))
        .route(
            "/api/v1/history/:id",
            delete(history::handle_delete_history_item),
        )
        .route("/api/v1/dashboard", get(history::handle_dashboard))
        // Strict function endpoints
        .route(
            "/functions/v1/ai-post-generator",
            post(functions::handle_post_generator),
        )
        .route(
            "/functions/v1/ai-post-analyzer",
            post(functions::handle_post_analyzer),
        )
        .route(
            "/functions/v1/ai-profile-optimizer",
            post(functions::handle_profile_optimizer),
        )
        .with_state(state)
}
