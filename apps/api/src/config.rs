use anyhow::{Context, Result};
use uuid::Uuid;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_AI_GATEWAY_MODEL: &str = "google/gemini-3-flash-preview";

/// Value shipped in `.env.example`. Treated as if no key were set.
const GEMINI_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY_HERE";

/// Application configuration loaded from environment variables.
///
/// Only `DATABASE_URL` is required. Both LLM keys are optional: without
/// `GEMINI_API_KEY` the app surface runs in demo mode, without
/// `AI_GATEWAY_API_KEY` the function surface answers 500.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub ai_gateway_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub ai_gateway_model: String,
    /// Identity used when a request carries no `x-user-id` header.
    pub dev_user_id: Option<Uuid>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is the
    /// production entry point; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let dev_user_id = optional("DEV_USER_ID")
            .map(|raw| Uuid::parse_str(raw.trim()))
            .transpose()
            .context("DEV_USER_ID must be a valid UUID")?;

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .context("Required environment variable 'DATABASE_URL' is not set")?,
            gemini_api_key: optional("GEMINI_API_KEY").filter(|k| k != GEMINI_KEY_PLACEHOLDER),
            gemini_api_url: optional("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            ai_gateway_api_key: optional("AI_GATEWAY_API_KEY"),
            ai_gateway_url: optional("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.to_string()),
            ai_gateway_model: optional("AI_GATEWAY_MODEL")
                .unwrap_or_else(|| DEFAULT_AI_GATEWAY_MODEL.to_string()),
            dev_user_id,
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
