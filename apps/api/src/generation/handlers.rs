//! Axum route handlers for the content tasks on the `/api/v1` surface.
//!
//! Each handler validates its form, runs the task wrapper (which never fails)
//! and stores the result. A failed insert is logged and reported through
//! `saved: false`; the generated content is still returned.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{analyze_post, generate_posts, optimize_profile};
use crate::generation::models::{
    AnalyzePostRequest, Generated, PostAnalyzerResult, PostGeneratorInput, PostGeneratorResult,
    ProfileOptimizerInput, ProfileOptimizerResult, ResultSource,
};
use crate::history::repository::{insert_generated_post, insert_profile_optimization};
use crate::models::post::NewGeneratedPost;
use crate::models::profile::NewProfileOptimization;
use crate::session::Session;
use crate::state::AppState;

pub const SAVE_FAILED_NOTICE: &str =
    "Your result was generated but could not be saved to history.";

#[derive(Debug, Serialize)]
pub struct TaskResponse<T> {
    pub result: T,
    pub source: ResultSource,
    pub saved: bool,
    pub record_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl<T> TaskResponse<T> {
    fn new(generated: Generated<T>, saved: Result<Uuid, sqlx::Error>, task: &str) -> Self {
        let (record_id, notice) = match saved {
            Ok(id) => (Some(id), None),
            Err(e) => {
                error!("Failed to save {task} result: {e}");
                (None, Some(SAVE_FAILED_NOTICE.to_string()))
            }
        };
        Self {
            result: generated.result,
            source: generated.source,
            saved: record_id.is_some(),
            record_id,
            notice,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// POST /api/v1/posts/generate
pub async fn handle_generate_posts(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<PostGeneratorInput>,
) -> Result<Json<TaskResponse<PostGeneratorResult>>, AppError> {
    if is_blank(&input.project_name) && is_blank(&input.features) {
        return Err(AppError::Validation(
            "Provide a project name or a list of features".to_string(),
        ));
    }

    let generated = generate_posts(&state.llm, &input).await;
    let record = NewGeneratedPost::from_generation(session.user_id, &input, &generated.result);
    let saved = insert_generated_post(&state.db, &record).await;

    Ok(Json(TaskResponse::new(generated, saved, "post generation")))
}

/// POST /api/v1/posts/analyze
pub async fn handle_analyze_post(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AnalyzePostRequest>,
) -> Result<Json<TaskResponse<PostAnalyzerResult>>, AppError> {
    if is_blank(&request.post) {
        return Err(AppError::Validation("post cannot be empty".to_string()));
    }

    let generated = analyze_post(&state.llm, &request.post).await;
    let record = NewGeneratedPost::from_analysis(session.user_id, &request.post, &generated.result);
    let saved = insert_generated_post(&state.db, &record).await;

    Ok(Json(TaskResponse::new(generated, saved, "post analysis")))
}

/// POST /api/v1/profile/optimize
pub async fn handle_optimize_profile(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<ProfileOptimizerInput>,
) -> Result<Json<TaskResponse<ProfileOptimizerResult>>, AppError> {
    if is_blank(&input.headline) && is_blank(&input.about) {
        return Err(AppError::Validation(
            "Provide a headline or an about section".to_string(),
        ));
    }

    let generated = optimize_profile(&state.llm, &input).await;
    let record = NewProfileOptimization::from_result(session.user_id, &input, &generated.result);
    let saved = insert_profile_optimization(&state.db, &record).await;

    Ok(Json(TaskResponse::new(generated, saved, "profile optimization")))
}
