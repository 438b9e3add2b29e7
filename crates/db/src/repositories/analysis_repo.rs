//! Repository for the `ai_analyses` table.

use sqlx::PgPool;

use compass_core::plan::AnalysisType;
use compass_core::types::DbId;

use crate::models::analysis::AiAnalysis;

/// Column list for `ai_analyses` queries.
const COLUMNS: &str = "id, user_id, analysis_type, result_json, created_at";

/// Provides operations for persisted analysis results.
pub struct AnalysisRepo;

impl AnalysisRepo {
    /// Persist an analysis result. Only called for tiers that allow
    /// saving; free-tier results stay in memory.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        analysis_type: AnalysisType,
        result: &serde_json::Value,
    ) -> Result<AiAnalysis, sqlx::Error> {
        let query = format!(
            "INSERT INTO ai_analyses (user_id, analysis_type, result_json) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AiAnalysis>(&query)
            .bind(user_id)
            .bind(analysis_type.as_str())
            .bind(result)
            .fetch_one(pool)
            .await
    }

    /// List a user's saved analyses, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AiAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ai_analyses WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, AiAnalysis>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one saved analysis scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<AiAnalysis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ai_analyses WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, AiAnalysis>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
