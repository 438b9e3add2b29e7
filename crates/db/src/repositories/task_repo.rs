//! Repository for the `tasks` table.

use sqlx::PgPool;

use compass_core::types::DbId;

use crate::models::task::{CreateTask, Task};

/// Column list for `tasks` queries.
const COLUMNS: &str =
    "id, goal_id, user_id, title, is_completed, completed_at, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Create a task under a goal.
    pub async fn create(
        pool: &PgPool,
        goal_id: DbId,
        user_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (goal_id, user_id, title) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(goal_id)
            .bind(user_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// List the tasks of one goal, oldest first.
    pub async fn list_for_goal(pool: &PgPool, goal_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE goal_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }

    /// Find one task scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a task.
    pub async fn update_title(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        title: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET title = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Flip a task's completion state, stamping or clearing
    /// `completed_at` to match.
    pub async fn toggle_completed(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks \
             SET is_completed = NOT is_completed, \
                 completed_at = CASE WHEN is_completed THEN NULL ELSE NOW() END, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
