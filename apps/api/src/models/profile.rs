use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::models::{ProfileOptimizerInput, ProfileOptimizerResult};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileOptimizationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_headline: Option<String>,
    pub optimized_headline: Option<String>,
    pub original_about: Option<String>,
    pub optimized_about: Option<String>,
    pub suggested_skills: Option<Vec<String>>,
    pub keyword_suggestions: Option<Vec<String>>,
    pub recruiter_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The slice of `profiles` the dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileSummaryRow {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub profile_strength_score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProfileOptimization {
    pub user_id: Uuid,
    pub original_headline: Option<String>,
    pub optimized_headline: String,
    pub original_about: Option<String>,
    pub optimized_about: String,
    pub suggested_skills: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub recruiter_summary: String,
}

impl NewProfileOptimization {
    pub fn from_result(
        user_id: Uuid,
        input: &ProfileOptimizerInput,
        result: &ProfileOptimizerResult,
    ) -> Self {
        let original = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            user_id,
            original_headline: original(&input.headline),
            optimized_headline: result.optimized_headline.clone(),
            original_about: original(&input.about),
            optimized_about: result.optimized_about.clone(),
            suggested_skills: result.suggested_skills.clone(),
            keyword_suggestions: result.keyword_suggestions.clone(),
            recruiter_summary: result.recruiter_summary.clone(),
        }
    }
}
