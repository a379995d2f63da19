//! Task wrappers: each pairs a prompt template with the gateway call and its
//! demo-mode fallback.
//!
//! Per task: render the user message, `LlmClient::complete`, parse JSON, then
//! shape check. Any miss along the way returns the demo result
//! instead. It is all-live or all-demo, never a merge.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::generation::demo::{demo_analysis, demo_posts, demo_profile};
use crate::generation::models::{
    Generated, PostAnalyzerResult, PostGeneratorInput, PostGeneratorResult,
    ProfileOptimizerInput, ProfileOptimizerResult, ResultShape,
};
use crate::generation::prompts::{
    post_analyzer_message, post_generator_message, profile_optimizer_message,
    POST_ANALYZER_SYSTEM, POST_GENERATOR_SYSTEM, PROFILE_OPTIMIZER_SYSTEM,
};
use crate::llm_client::{parse_json, LlmClient, LlmError};

/// Three post variants plus hooks, hashtags and CTAs for a project.
pub async fn generate_posts(
    llm: &LlmClient,
    input: &PostGeneratorInput,
) -> Generated<PostGeneratorResult> {
    let message = post_generator_message(input);
    match live_result::<PostGeneratorResult>(llm, POST_GENERATOR_SYSTEM, &message, "post generation")
        .await
    {
        Some(mut result) => {
            result.normalize_hashtags();
            Generated::live(result)
        }
        None => {
            info!("Using demo mode for post generation");
            Generated::demo(demo_posts(input))
        }
    }
}

/// Score and rewrite of an existing post.
pub async fn analyze_post(llm: &LlmClient, post: &str) -> Generated<PostAnalyzerResult> {
    let message = post_analyzer_message(post);
    match live_result(llm, POST_ANALYZER_SYSTEM, &message, "post analysis").await {
        Some(result) => Generated::live(result),
        None => {
            info!("Using demo mode for post analysis");
            Generated::demo(demo_analysis(post))
        }
    }
}

/// Rewritten headline/about plus skill and keyword suggestions.
pub async fn optimize_profile(
    llm: &LlmClient,
    input: &ProfileOptimizerInput,
) -> Generated<ProfileOptimizerResult> {
    let message = profile_optimizer_message(input);
    match live_result(llm, PROFILE_OPTIMIZER_SYSTEM, &message, "profile optimization").await {
        Some(result) => Generated::live(result),
        None => {
            info!("Using demo mode for profile optimization");
            Generated::demo(demo_profile(input))
        }
    }
}

/// `None` when the gateway reports absence or the text fails to parse or
/// validate.
async fn live_result<T>(llm: &LlmClient, system: &str, message: &str, task: &str) -> Option<T>
where
    T: DeserializeOwned + ResultShape,
{
    let text = llm.complete(system, message).await?;
    match parse_validated::<T>(&text) {
        Ok(result) => Some(result),
        Err(e) => {
            warn!("Discarding unusable {task} reply: {e}");
            None
        }
    }
}

fn parse_validated<T>(text: &str) -> Result<T, LlmError>
where
    T: DeserializeOwned + ResultShape,
{
    let result: T = parse_json(text)?;
    result.validate().map_err(LlmError::InvalidShape)?;
    Ok(result)
}

/// Strict variant for callers that surface failures instead of falling back.
pub async fn request_validated<T>(llm: &LlmClient, system: &str, message: &str) -> Result<T, LlmError>
where
    T: DeserializeOwned + ResultShape,
{
    let result: T = llm.call_json(system, message).await?;
    result.validate().map_err(LlmError::InvalidShape)?;
    Ok(result)
}
