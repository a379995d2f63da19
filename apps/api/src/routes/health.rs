use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service version plus which backends are active. Never touches the database.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "postpilot-api",
        "llm_backend": state.llm.backend_name(),
        "demo_mode": !state.llm.is_configured(),
        "functions_backend": state.gateway.backend_name(),
    }))
}
