use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// App surface: Gemini with rate-limit retries, demo fallback on failure.
    pub llm: LlmClient,
    /// Function surface: chat gateway, errors passed through.
    pub gateway: LlmClient,
    pub config: Config,
}
