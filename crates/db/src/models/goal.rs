//! Goal entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `goals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub priority: String,
    /// Provenance, set at creation: `user`, `onboarding`, or `suggested`.
    pub origin: String,
    pub target_date: Option<chrono::NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a goal.
#[derive(Debug, Deserialize)]
pub struct CreateGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub origin: Option<String>,
    pub target_date: Option<chrono::NaiveDate>,
}

/// DTO for partially updating a goal. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateGoal {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub target_date: Option<chrono::NaiveDate>,
}
