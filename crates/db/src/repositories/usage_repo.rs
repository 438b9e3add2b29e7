//! Repository for the `usage_limits` table.

use sqlx::PgPool;

use compass_core::plan::{AnalysisType, SubscriptionTier, ALL_ANALYSIS_TYPES};
use compass_core::types::DbId;

use crate::models::usage::UsageLimits;

/// Column list for `usage_limits` queries.
const COLUMNS: &str = "\
    id, user_id, \
    clarity_used, clarity_limit, strengths_used, strengths_limit, \
    career_path_used, career_path_limit, values_used, values_limit, \
    persona_used, persona_limit, \
    created_at, updated_at";

/// The `used` column name for an analysis type.
fn used_column(analysis_type: AnalysisType) -> &'static str {
    match analysis_type {
        AnalysisType::Clarity => "clarity_used",
        AnalysisType::Strengths => "strengths_used",
        AnalysisType::CareerPath => "career_path_used",
        AnalysisType::Values => "values_used",
        AnalysisType::Persona => "persona_used",
    }
}

/// The `limit` column name for an analysis type.
fn limit_column(analysis_type: AnalysisType) -> &'static str {
    match analysis_type {
        AnalysisType::Clarity => "clarity_limit",
        AnalysisType::Strengths => "strengths_limit",
        AnalysisType::CareerPath => "career_path_limit",
        AnalysisType::Values => "values_limit",
        AnalysisType::Persona => "persona_limit",
    }
}

/// Provides operations for per-user usage counters.
pub struct UsageRepo;

impl UsageRepo {
    /// Find the counters row for a user, if one exists. Absence is not
    /// an error: the ledger reader falls back to tier defaults.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UsageLimits>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usage_limits WHERE user_id = $1");
        sqlx::query_as::<_, UsageLimits>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Get the counters row for a user, creating one lazily with the
    /// tier's default limits on first use.
    ///
    /// Uses a no-op `DO UPDATE` so a concurrent first use still returns
    /// the row instead of racing on insert.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
        tier: SubscriptionTier,
    ) -> Result<UsageLimits, sqlx::Error> {
        let limit_columns: Vec<&'static str> =
            ALL_ANALYSIS_TYPES.iter().map(|&t| limit_column(t)).collect();
        let placeholders: Vec<String> = (2..2 + ALL_ANALYSIS_TYPES.len())
            .map(|i| format!("${i}"))
            .collect();

        let query = format!(
            "INSERT INTO usage_limits (user_id, {}) \
             VALUES ($1, {}) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = usage_limits.user_id \
             RETURNING {COLUMNS}",
            limit_columns.join(", "),
            placeholders.join(", ")
        );

        let mut q = sqlx::query_as::<_, UsageLimits>(&query).bind(user_id);
        for analysis_type in ALL_ANALYSIS_TYPES {
            q = q.bind(tier.default_limit(analysis_type));
        }
        q.fetch_one(pool).await
    }

    /// Atomically increment the `used` counter for one analysis type by
    /// exactly 1. Called only after a confirmed successful provider
    /// call; failed invocations never reach this.
    pub async fn increment_used(
        pool: &PgPool,
        user_id: DbId,
        analysis_type: AnalysisType,
    ) -> Result<UsageLimits, sqlx::Error> {
        let col = used_column(analysis_type);
        let query = format!(
            "UPDATE usage_limits SET {col} = {col} + 1, updated_at = NOW() \
             WHERE user_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UsageLimits>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
