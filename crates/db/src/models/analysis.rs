//! Persisted analysis result model.

use serde::Serialize;
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `ai_analyses` table. The result is an opaque JSON blob
/// returned by the analysis provider; only paid tiers get rows here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AiAnalysis {
    pub id: DbId,
    pub user_id: DbId,
    pub analysis_type: String,
    pub result_json: serde_json::Value,
    pub created_at: Timestamp,
}
