//! Onboarding step record model.

use serde::Serialize;
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `user_onboarding` table: at most one per
/// (user, step name), enforced by a unique constraint. A null
/// `completed_at` means the step was reached but not finished.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingStepRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub step_name: String,
    pub completed_at: Option<Timestamp>,
    pub payload_json: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
