//! The `/functions/v1` surface: one endpoint per task, backed by the chat
//! gateway, with no demo fallback and no persistence. Failures are reported
//! as `{"error": message}`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::generation::generator::request_validated;
use crate::generation::models::{
    AnalyzePostRequest, PostAnalyzerResult, PostGeneratorInput, PostGeneratorResult,
    ProfileOptimizerInput, ProfileOptimizerResult,
};
use crate::generation::prompts::{
    post_analyzer_message, post_generator_message, profile_optimizer_message,
    POST_ANALYZER_SYSTEM, POST_GENERATOR_SYSTEM, PROFILE_OPTIMIZER_SYSTEM,
};
use crate::llm_client::LlmError;
use crate::state::AppState;

const MIN_ANALYZED_POST_CHARS: usize = 10;
const INVALID_POST_MESSAGE: &str = "Please provide a valid LinkedIn post to analyze";

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("{0}")]
    BadRequest(String),

    #[error("AI gateway key is not configured")]
    NotConfigured,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,

    #[error("{0}")]
    Upstream(String),
}

impl From<LlmError> for FunctionError {
    fn from(e: LlmError) -> Self {
        match e.status() {
            Some(429) => FunctionError::RateLimited,
            Some(402) => FunctionError::CreditsExhausted,
            _ => match e {
                LlmError::NotConfigured => FunctionError::NotConfigured,
                LlmError::Api { status, .. } => {
                    FunctionError::Upstream(format!("AI gateway error: {status}"))
                }
                other => FunctionError::Upstream(other.to_string()),
            },
        }
    }
}

impl From<JsonRejection> for FunctionError {
    fn from(rejection: JsonRejection) -> Self {
        FunctionError::BadRequest(rejection.body_text())
    }
}

impl FunctionError {
    pub fn status(&self) -> StatusCode {
        match self {
            FunctionError::BadRequest(_) => StatusCode::BAD_REQUEST,
            FunctionError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            FunctionError::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
            FunctionError::NotConfigured | FunctionError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Function error: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// POST /functions/v1/ai-post-generator
pub async fn handle_post_generator(
    State(state): State<AppState>,
    body: Result<Json<PostGeneratorInput>, JsonRejection>,
) -> Result<Json<PostGeneratorResult>, FunctionError> {
    let Json(input) = body?;
    let mut result: PostGeneratorResult = request_validated(
        &state.gateway,
        POST_GENERATOR_SYSTEM,
        &post_generator_message(&input),
    )
    .await?;
    result.normalize_hashtags();
    Ok(Json(result))
}

/// POST /functions/v1/ai-post-analyzer
///
/// The key check runs before input validation. A missing, null or
/// unparsable `post` is reported the same way as a short one.
pub async fn handle_post_analyzer(
    State(state): State<AppState>,
    body: Result<Json<AnalyzePostRequest>, JsonRejection>,
) -> Result<Json<PostAnalyzerResult>, FunctionError> {
    if !state.gateway.is_configured() {
        return Err(FunctionError::NotConfigured);
    }
    let request = match body {
        Ok(Json(request)) if request.post.trim().chars().count() >= MIN_ANALYZED_POST_CHARS => {
            request
        }
        _ => return Err(FunctionError::BadRequest(INVALID_POST_MESSAGE.to_string())),
    };

    let result = request_validated(
        &state.gateway,
        POST_ANALYZER_SYSTEM,
        &post_analyzer_message(&request.post),
    )
    .await?;
    Ok(Json(result))
}

/// POST /functions/v1/ai-profile-optimizer
pub async fn handle_profile_optimizer(
    State(state): State<AppState>,
    body: Result<Json<ProfileOptimizerInput>, JsonRejection>,
) -> Result<Json<ProfileOptimizerResult>, FunctionError> {
    let Json(input) = body?;
    let result = request_validated(
        &state.gateway,
        PROFILE_OPTIMIZER_SYSTEM,
        &profile_optimizer_message(&input),
    )
    .await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_and_credits_pass_through() {
        let rate_limited = FunctionError::from(LlmError::Api {
            status: 429,
            message: String::new(),
        });
        assert_eq!(rate_limited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            rate_limited.to_string(),
            "Rate limit exceeded. Please try again later."
        );

        let exhausted = FunctionError::from(LlmError::Api {
            status: 402,
            message: String::new(),
        });
        assert_eq!(exhausted.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            exhausted.to_string(),
            "AI credits exhausted. Please add credits to continue."
        );
    }

    #[test]
    fn test_other_failures_are_internal() {
        let not_configured = FunctionError::from(LlmError::NotConfigured);
        assert_eq!(not_configured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(not_configured.to_string(), "AI gateway key is not configured");

        let upstream = FunctionError::from(LlmError::Api {
            status: 503,
            message: "busy".into(),
        });
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.to_string(), "AI gateway error: 503");

        let shape = FunctionError::from(LlmError::EmptyContent);
        assert_eq!(shape.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
