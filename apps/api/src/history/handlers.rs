//! Axum route handlers for history and the dashboard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::hashtags::{display_hashtags, HISTORY_TAG_LIMIT};
use crate::history::repository::{
    delete_generated_post, get_profile_summary, list_generated_posts,
    list_profile_optimizations, recent_generated_posts,
};
use crate::models::post::{GeneratedPostRow, RecentPostRow};
use crate::models::profile::{ProfileOptimizationRow, ProfileSummaryRow};
use crate::session::Session;
use crate::state::AppState;

const DASHBOARD_RECENT_POSTS: i64 = 5;

#[derive(Debug, Serialize)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub post: GeneratedPostRow,
    pub display_hashtags: Vec<String>,
}

impl From<GeneratedPostRow> for HistoryItem {
    fn from(post: GeneratedPostRow) -> Self {
        let display_hashtags = post
            .hashtags
            .as_deref()
            .map(|tags| display_hashtags(tags, HISTORY_TAG_LIMIT))
            .unwrap_or_default();
        Self {
            post,
            display_hashtags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: Option<ProfileSummaryRow>,
    pub recent_posts: Vec<RecentPostRow>,
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    let posts = list_generated_posts(&state.db, session.user_id).await?;
    Ok(Json(posts.into_iter().map(HistoryItem::from).collect()))
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_history_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !delete_generated_post(&state.db, session.user_id, id).await? {
        return Err(AppError::NotFound(format!("Post {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profile/optimizations
pub async fn handle_list_optimizations(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<ProfileOptimizationRow>>, AppError> {
    Ok(Json(
        list_profile_optimizations(&state.db, session.user_id).await?,
    ))
}

/// GET /api/v1/dashboard
///
/// Profile summary (if the user has a profile row) and the five most recent posts.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<DashboardResponse>, AppError> {
    let profile = get_profile_summary(&state.db, session.user_id).await?;
    let recent_posts =
        recent_generated_posts(&state.db, session.user_id, DASHBOARD_RECENT_POSTS).await?;
    Ok(Json(DashboardResponse {
        profile,
        recent_posts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(hashtags: Option<Vec<String>>) -> GeneratedPostRow {
        GeneratedPostRow {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            post_type: "generated".into(),
            project_name: Some("Civic AI".into()),
            tech_stack: None,
            features: None,
            purpose: None,
            tone: None,
            original_content: None,
            generated_content: "Post".into(),
            engagement_score: None,
            hook_suggestions: None,
            hashtags,
            cta_suggestions: None,
            formatting_tips: None,
            best_posting_time: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_history_item_shows_five_display_tags() {
        let tags = ["#buildinpublic", "startup", "#Civic AI", "#a", "#b", "#c"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let item = HistoryItem::from(row(Some(tags)));
        assert_eq!(
            item.display_hashtags,
            vec!["#buildinpublic", "#startup", "#CivicAI", "#a", "#b"]
        );
    }

    #[test]
    fn test_history_item_without_tags() {
        let item = HistoryItem::from(row(None));
        assert!(item.display_hashtags.is_empty());
    }

    #[test]
    fn test_history_item_serializes_flat() {
        let item = HistoryItem::from(row(Some(vec!["x".into()])));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["project_name"], "Civic AI");
        assert_eq!(value["display_hashtags"][0], "#x");
    }
}
