//! Usage counters model.

use serde::Serialize;
use sqlx::FromRow;

use compass_core::plan::AnalysisType;
use compass_core::types::{DbId, Timestamp};
use compass_core::usage::UsageCounters;

/// A row from the `usage_limits` table: one row per user, a used/limit
/// pair per analysis type. A `-1` limit means unlimited.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UsageLimits {
    pub id: DbId,
    pub user_id: DbId,
    pub clarity_used: i32,
    pub clarity_limit: i32,
    pub strengths_used: i32,
    pub strengths_limit: i32,
    pub career_path_used: i32,
    pub career_path_limit: i32,
    pub values_used: i32,
    pub values_limit: i32,
    pub persona_used: i32,
    pub persona_limit: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UsageCounters for UsageLimits {
    fn used(&self, analysis_type: AnalysisType) -> i32 {
        match analysis_type {
            AnalysisType::Clarity => self.clarity_used,
            AnalysisType::Strengths => self.strengths_used,
            AnalysisType::CareerPath => self.career_path_used,
            AnalysisType::Values => self.values_used,
            AnalysisType::Persona => self.persona_used,
        }
    }

    fn limit(&self, analysis_type: AnalysisType) -> i32 {
        match analysis_type {
            AnalysisType::Clarity => self.clarity_limit,
            AnalysisType::Strengths => self.strengths_limit,
            AnalysisType::CareerPath => self.career_path_limit,
            AnalysisType::Values => self.values_limit,
            AnalysisType::Persona => self.persona_limit,
        }
    }
}
