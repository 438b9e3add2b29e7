//! User profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `profiles` table. Created lazily on first access.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub display_name: String,
    pub headline: String,
    pub focus_areas_json: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for partially updating a profile. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub headline: Option<String>,
    pub focus_areas_json: Option<Vec<String>>,
}
