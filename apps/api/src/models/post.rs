use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::models::{PostAnalyzerResult, PostGeneratorInput, PostGeneratorResult};

/// Value of `generated_posts.post_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Generated,
    Analyzed,
}

impl PostType {
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Generated => "generated",
            PostType::Analyzed => "analyzed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedPostRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_type: String,
    pub project_name: Option<String>,
    pub tech_stack: Option<String>,
    pub features: Option<String>,
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub original_content: Option<String>,
    pub generated_content: String,
    pub engagement_score: Option<i32>,
    pub hook_suggestions: Option<Vec<String>>,
    pub hashtags: Option<Vec<String>>,
    pub cta_suggestions: Option<Vec<String>>,
    pub formatting_tips: Option<Vec<String>>,
    pub best_posting_time: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Dashboard projection of `generated_posts`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentPostRow {
    pub id: Uuid,
    pub project_name: Option<String>,
    pub post_type: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `generated_posts`. Blank form fields are stored as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeneratedPost {
    pub user_id: Uuid,
    pub post_type: PostType,
    pub project_name: Option<String>,
    pub tech_stack: Option<String>,
    pub features: Option<String>,
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub original_content: Option<String>,
    pub generated_content: String,
    pub engagement_score: Option<i32>,
    pub hook_suggestions: Option<Vec<String>>,
    pub hashtags: Option<Vec<String>>,
    pub cta_suggestions: Option<Vec<String>>,
    pub formatting_tips: Option<Vec<String>>,
    pub best_posting_time: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl NewGeneratedPost {
    /// The first variant is stored as the post body; the rest are not kept.
    pub fn from_generation(
        user_id: Uuid,
        input: &PostGeneratorInput,
        result: &PostGeneratorResult,
    ) -> Self {
        Self {
            user_id,
            post_type: PostType::Generated,
            project_name: non_blank(&input.project_name),
            tech_stack: non_blank(&input.tech_stack),
            features: non_blank(&input.features),
            purpose: non_blank(&input.purpose),
            tone: non_blank(&input.tone),
            original_content: None,
            generated_content: result.posts.first().cloned().unwrap_or_default(),
            engagement_score: None,
            hook_suggestions: Some(result.hook_suggestions.clone()),
            hashtags: Some(result.hashtags.clone()),
            cta_suggestions: Some(result.cta_suggestions.clone()),
            formatting_tips: None,
            best_posting_time: Some(result.best_posting_time.clone()),
        }
    }

    pub fn from_analysis(user_id: Uuid, original: &str, result: &PostAnalyzerResult) -> Self {
        Self {
            user_id,
            post_type: PostType::Analyzed,
            project_name: None,
            tech_stack: None,
            features: None,
            purpose: None,
            tone: None,
            original_content: Some(original.to_string()),
            generated_content: result.improved_version.clone(),
            engagement_score: Some(result.engagement_score as i32),
            hook_suggestions: Some(result.hook_improvements.clone()),
            hashtags: None,
            cta_suggestions: None,
            formatting_tips: Some(result.formatting_tips.clone()),
            best_posting_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::demo::{demo_analysis, demo_posts};

    #[test]
    fn test_from_generation_keeps_first_variant() {
        let input = PostGeneratorInput {
            project_name: "Civic AI".into(),
            tech_stack: "  ".into(),
            ..Default::default()
        };
        let result = demo_posts(&input);
        let record = NewGeneratedPost::from_generation(Uuid::nil(), &input, &result);

        assert_eq!(record.post_type, PostType::Generated);
        assert_eq!(record.generated_content, result.posts[0]);
        assert_eq!(record.project_name.as_deref(), Some("Civic AI"));
        assert!(record.tech_stack.is_none());
        assert_eq!(record.hashtags.as_ref(), Some(&result.hashtags));
        assert!(record.engagement_score.is_none());
        assert!(record.original_content.is_none());
    }

    #[test]
    fn test_from_analysis_keeps_original_and_score() {
        let result = demo_analysis("My original post");
        let record = NewGeneratedPost::from_analysis(Uuid::nil(), "My original post", &result);

        assert_eq!(record.post_type.as_str(), "analyzed");
        assert_eq!(record.original_content.as_deref(), Some("My original post"));
        assert_eq!(record.generated_content, result.improved_version);
        assert_eq!(record.engagement_score, Some(result.engagement_score as i32));
        assert_eq!(record.formatting_tips.as_ref(), Some(&result.formatting_tips));
        assert!(record.hashtags.is_none());
    }
}
