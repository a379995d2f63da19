//! LLM client: the single point of entry for all model calls in PostPilot.
//!
//! ARCHITECTURAL RULE: No other module may call an inference endpoint directly.
//! Wire formats live in the backends (`gemini`, `gateway`); retry policy and the
//! "absence" signal used by demo-mode fallbacks live here.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;

pub mod gateway;
pub mod gemini;

pub use gateway::ChatGatewayBackend;
pub use gemini::GeminiBackend;

/// Fixed waits between attempts when the endpoint answers 429.
const RATE_LIMIT_DELAYS: [Duration; 2] = [Duration::from_secs(2), Duration::from_secs(5)];
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No API key configured for the LLM backend")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM result failed shape check: {0}")]
    InvalidShape(String),
}

impl LlmError {
    fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::Api { status: 429, .. })
    }

    /// Upstream HTTP status, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

/// One wire format for one inference endpoint. A backend makes exactly one
/// request per `send` and reports a 429 as `LlmError::Api { status: 429, .. }`
/// so the client can apply its retry policy.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, system: &str, message: &str) -> Result<String, LlmError>;
}

/// Waits applied between attempts on rate limiting. The number of delays is
/// the number of additional attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub rate_limit_delays: Vec<Duration>,
}

impl RetryPolicy {
    /// 2s then 5s: three requests total.
    pub fn rate_limit_default() -> Self {
        Self {
            rate_limit_delays: RATE_LIMIT_DELAYS.to_vec(),
        }
    }

    /// Single attempt; a 429 is returned to the caller as-is.
    pub fn none() -> Self {
        Self {
            rate_limit_delays: Vec::new(),
        }
    }
}

/// Builds the shared outbound HTTP client.
pub fn build_http_client() -> Result<reqwest::Client, LlmError> {
    Ok(reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?)
}

/// Cheap to clone; carried in `AppState`.
///
/// A client without a backend is "disabled": every call reports
/// `NotConfigured` without touching the network.
#[derive(Clone)]
pub struct LlmClient {
    backend: Option<Arc<dyn CompletionBackend>>,
    retry: RetryPolicy,
}

impl LlmClient {
    pub fn new(backend: Arc<dyn CompletionBackend>, retry: RetryPolicy) -> Self {
        Self {
            backend: Some(backend),
            retry,
        }
    }

    pub fn disabled() -> Self {
        Self {
            backend: None,
            retry: RetryPolicy::none(),
        }
    }

    /// App-surface client: Gemini with the rate-limit retry schedule.
    /// Disabled when no key is configured.
    pub fn gemini(config: &Config, http: reqwest::Client) -> Self {
        match &config.gemini_api_key {
            Some(key) => Self::new(
                Arc::new(GeminiBackend::new(
                    http,
                    config.gemini_api_url.clone(),
                    key.clone(),
                )),
                RetryPolicy::rate_limit_default(),
            ),
            None => {
                info!("GEMINI_API_KEY not set; AI features run in demo mode");
                Self::disabled()
            }
        }
    }

    /// Function-surface client: chat gateway, no retries.
    pub fn chat_gateway(config: &Config, http: reqwest::Client) -> Self {
        match &config.ai_gateway_api_key {
            Some(key) => Self::new(
                Arc::new(ChatGatewayBackend::new(
                    http,
                    config.ai_gateway_url.clone(),
                    key.clone(),
                    config.ai_gateway_model.clone(),
                )),
                RetryPolicy::none(),
            ),
            None => {
                info!("AI_GATEWAY_API_KEY not set; function endpoints will fail");
                Self::disabled()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.as_ref().map(|b| b.name()).unwrap_or("disabled")
    }

    /// Makes the call, retrying on 429 according to the retry policy.
    /// Any other failure is returned immediately.
    pub async fn call(&self, system: &str, message: &str) -> Result<String, LlmError> {
        let backend = self.backend.as_ref().ok_or(LlmError::NotConfigured)?;

        let mut attempt = 0usize;
        loop {
            match backend.send(system, message).await {
                Err(e) if e.is_rate_limited() => {
                    let Some(delay) = self.retry.rate_limit_delays.get(attempt).copied() else {
                        warn!(
                            "{} rate limited on attempt {}; giving up",
                            backend.name(),
                            attempt + 1
                        );
                        return Err(LlmError::RateLimited {
                            attempts: attempt as u32 + 1,
                        });
                    };
                    warn!(
                        "Rate limited (attempt {}), retrying in {}ms...",
                        attempt + 1,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Ok(text) => {
                    debug!(
                        "{} call succeeded after {} attempt(s), {} chars",
                        backend.name(),
                        attempt + 1,
                        text.len()
                    );
                    return Ok(text);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Absence-signalling variant used by the demo-mode task wrappers.
    /// Every failure class collapses to `None`.
    pub async fn complete(&self, system: &str, message: &str) -> Option<String> {
        match self.call(system, message).await {
            Ok(text) => Some(text),
            Err(LlmError::NotConfigured) => None,
            Err(e) => {
                warn!("LLM call failed, falling back to demo mode: {e}");
                None
            }
        }
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        system: &str,
        message: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(system, message).await?;
        parse_json(&text)
    }
}

/// Parses model output as JSON after stripping markdown fences.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Reads the error body of a non-success response into `LlmError::Api`.
async fn api_error(response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    LlmError::Api { status, message }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted backend for exercising the retry loop and task wrappers.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    pub enum Reply {
        Text(String),
        Status(u16),
    }

    /// Replays `replies` in order, then repeats `fallback` forever.
    pub struct ScriptedBackend {
        replies: Mutex<VecDeque<Reply>>,
        fallback: u16,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        pub fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                fallback: 500,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn always_status(status: u16) -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                fallback: status,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn text(body: impl Into<String>) -> Self {
            Self::new(vec![Reply::Text(body.into())])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn send(&self, _system: &str, _message: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.replies.lock().unwrap().pop_front();
            match next {
                Some(Reply::Text(text)) => Ok(text),
                Some(Reply::Status(status)) => Err(LlmError::Api {
                    status,
                    message: String::new(),
                }),
                None => Err(LlmError::Api {
                    status: self.fallback,
                    message: String::new(),
                }),
            }
        }
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn serve_stub(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn client_with(backend: Arc<ScriptedBackend>, retry: RetryPolicy) -> LlmClient {
        LlmClient::new(backend, retry)
    }
}
