//! Request and result shapes for the three AI tasks.
//!
//! Live model replies and demo-mode output deserialize into the same structs,
//! and live replies must additionally pass `ResultShape::validate`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::generation::hashtags::display_hashtag;

/// Where a task result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Demo,
}

/// A task result tagged with its source.
#[derive(Debug, Clone)]
pub struct Generated<T> {
    pub result: T,
    pub source: ResultSource,
}

impl<T> Generated<T> {
    pub fn live(result: T) -> Self {
        Self {
            result,
            source: ResultSource::Live,
        }
    }

    pub fn demo(result: T) -> Self {
        Self {
            result,
            source: ResultSource::Demo,
        }
    }
}

/// Structural check applied to live model output before it is trusted.
pub trait ResultShape {
    fn validate(&self) -> Result<(), String>;
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is empty"))
    } else {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Post generation
// ────────────────────────────────────────────────────────────────────────────

pub const POST_VARIANTS: usize = 3;

/// Form fields for post generation. Every field may be blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostGeneratorInput {
    pub project_name: String,
    pub tech_stack: String,
    pub features: String,
    pub purpose: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostGeneratorResult {
    pub posts: Vec<String>,
    pub hook_suggestions: Vec<String>,
    pub hashtags: Vec<String>,
    pub cta_suggestions: Vec<String>,
    pub best_posting_time: String,
}

impl PostGeneratorResult {
    /// Rewrites hashtags through the display path, dropping blank ones.
    pub fn normalize_hashtags(&mut self) {
        self.hashtags = self
            .hashtags
            .iter()
            .filter_map(|tag| display_hashtag(tag))
            .collect();
    }
}

impl ResultShape for PostGeneratorResult {
    fn validate(&self) -> Result<(), String> {
        if self.posts.len() != POST_VARIANTS {
            return Err(format!(
                "expected {POST_VARIANTS} posts, got {}",
                self.posts.len()
            ));
        }
        for (i, post) in self.posts.iter().enumerate() {
            require_text(&format!("posts[{i}]"), post)?;
        }
        require_text("bestPostingTime", &self.best_posting_time)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Post analysis
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzePostRequest {
    pub post: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnalyzerResult {
    pub improved_version: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub engagement_score: u8,
    pub hook_improvements: Vec<String>,
    pub formatting_tips: Vec<String>,
    pub overall_feedback: String,
}

/// Models sometimes answer `7.5` or `"8"`. Accept any number or numeric
/// string and round; range is checked in `validate`.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => n,
        RawScore::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric score {s:?}")))?,
    };

    if !value.is_finite() || value < 0.0 || value > u8::MAX as f64 {
        return Err(serde::de::Error::custom(format!("score out of range: {value}")));
    }
    Ok(value.round() as u8)
}

impl ResultShape for PostAnalyzerResult {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.engagement_score) {
            return Err(format!(
                "engagementScore {} outside {MIN_SCORE}..={MAX_SCORE}",
                self.engagement_score
            ));
        }
        require_text("improvedVersion", &self.improved_version)?;
        require_text("overallFeedback", &self.overall_feedback)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile optimization
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileOptimizerInput {
    pub headline: String,
    pub about: String,
    /// Comma-separated.
    pub skills: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptimizerResult {
    pub optimized_headline: String,
    pub optimized_about: String,
    pub suggested_skills: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub recruiter_summary: String,
}

impl ResultShape for ProfileOptimizerResult {
    fn validate(&self) -> Result<(), String> {
        require_text("optimizedHeadline", &self.optimized_headline)?;
        require_text("optimizedAbout", &self.optimized_about)?;
        require_text("recruiterSummary", &self.recruiter_summary)
    }
}
