//! Repository for the `user_onboarding` table.

use sqlx::PgPool;

use compass_core::onboarding::OnboardingStep;
use compass_core::types::DbId;

use crate::models::onboarding::OnboardingStepRecord;

/// Column list for `user_onboarding` queries.
const COLUMNS: &str =
    "id, user_id, step_name, completed_at, payload_json, created_at, updated_at";

/// Provides operations for onboarding step records.
pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Mark a step complete for a user: a single idempotent upsert keyed
    /// by (user, step name).
    ///
    /// Re-completing an already-completed step updates `completed_at`
    /// and the payload in place; it never creates a second row. This
    /// replaces the check-then-insert pattern and its race window.
    pub async fn complete_step(
        pool: &PgPool,
        user_id: DbId,
        step: OnboardingStep,
        payload: &serde_json::Value,
    ) -> Result<OnboardingStepRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_onboarding (user_id, step_name, completed_at, payload_json) \
             VALUES ($1, $2, NOW(), $3) \
             ON CONFLICT (user_id, step_name) \
             DO UPDATE SET completed_at = NOW(), \
                           payload_json = EXCLUDED.payload_json, \
                           updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingStepRecord>(&query)
            .bind(user_id)
            .bind(step.as_str())
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// List all step records for a user (completed or merely reached).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OnboardingStepRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_onboarding WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, OnboardingStepRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// The step names a user has a non-null `completed_at` for.
    pub async fn completed_step_names(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT step_name FROM user_onboarding \
             WHERE user_id = $1 AND completed_at IS NOT NULL",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Delete all step records for a user, restarting the wizard.
    pub async fn reset(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_onboarding WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
