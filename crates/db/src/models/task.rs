//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `tasks` table. Tasks belong to a goal and are deleted
/// with it (FK cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub goal_id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task under a goal.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub title: String,
}

/// DTO for updating a task's title.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
}
