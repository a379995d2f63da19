//! Queries over `generated_posts`, `profile_optimizations` and `profiles`.
//!
//! Inserts are independent; nothing here spans a transaction. Every query is
//! scoped to the owning user.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::post::{GeneratedPostRow, NewGeneratedPost, RecentPostRow};
use crate::models::profile::{NewProfileOptimization, ProfileOptimizationRow, ProfileSummaryRow};

pub async fn insert_generated_post(
    pool: &PgPool,
    post: &NewGeneratedPost,
) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO generated_posts
            (user_id, post_type, project_name, tech_stack, features, purpose, tone,
             original_content, generated_content, engagement_score, hook_suggestions,
             hashtags, cta_suggestions, formatting_tips, best_posting_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING id
        "#,
    )
    .bind(post.user_id)
    .bind(post.post_type.as_str())
    .bind(&post.project_name)
    .bind(&post.tech_stack)
    .bind(&post.features)
    .bind(&post.purpose)
    .bind(&post.tone)
    .bind(&post.original_content)
    .bind(&post.generated_content)
    .bind(post.engagement_score)
    .bind(&post.hook_suggestions)
    .bind(&post.hashtags)
    .bind(&post.cta_suggestions)
    .bind(&post.formatting_tips)
    .bind(&post.best_posting_time)
    .fetch_one(pool)
    .await?;

    info!(
        "Saved {} post {id} for user {}",
        post.post_type.as_str(),
        post.user_id
    );
    Ok(id)
}

pub async fn insert_profile_optimization(
    pool: &PgPool,
    record: &NewProfileOptimization,
) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO profile_optimizations
            (user_id, original_headline, optimized_headline, original_about,
             optimized_about, suggested_skills, keyword_suggestions, recruiter_summary)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(record.user_id)
    .bind(&record.original_headline)
    .bind(&record.optimized_headline)
    .bind(&record.original_about)
    .bind(&record.optimized_about)
    .bind(&record.suggested_skills)
    .bind(&record.keyword_suggestions)
    .bind(&record.recruiter_summary)
    .fetch_one(pool)
    .await?;

    info!("Saved profile optimization {id} for user {}", record.user_id);
    Ok(id)
}

/// All generated and analyzed posts for a user, newest first.
pub async fn list_generated_posts(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<GeneratedPostRow>, sqlx::Error> {
    sqlx::query_as::<_, GeneratedPostRow>(
        "SELECT * FROM generated_posts WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn recent_generated_posts(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<RecentPostRow>, sqlx::Error> {
    sqlx::query_as::<_, RecentPostRow>(
        r#"
        SELECT id, project_name, post_type, created_at
        FROM generated_posts
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Returns `false` when no row with that id belongs to the user.
pub async fn delete_generated_post(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM generated_posts WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_profile_optimizations(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ProfileOptimizationRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileOptimizationRow>(
        "SELECT * FROM profile_optimizations WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_profile_summary(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ProfileSummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileSummaryRow>(
        "SELECT full_name, headline, profile_strength_score FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
