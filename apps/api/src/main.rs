mod config;
mod db;
mod errors;
mod functions;
mod generation;
mod history;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{build_http_client, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PostPilot API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL, with migrations applied
    let db = create_pool(&config.database_url).await?;

    // One outbound HTTP client shared by both LLM backends
    let http = build_http_client()?;
    let llm = LlmClient::gemini(&config, http.clone());
    let gateway = LlmClient::chat_gateway(&config, http);
    info!(
        "LLM clients initialized (app: {}, functions: {})",
        llm.backend_name(),
        gateway.backend_name()
    );

    let state = AppState {
        db,
        llm,
        gateway,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
