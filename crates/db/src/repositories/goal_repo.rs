//! Repository for the `goals` table.

use sqlx::PgPool;

use compass_core::types::DbId;

use crate::models::goal::{CreateGoal, Goal, UpdateGoal};

/// Column list for `goals` queries.
const COLUMNS: &str = "\
    id, user_id, title, description, category, status, priority, origin, \
    target_date, created_at, updated_at";

/// Task counts for computing goal progress.
#[derive(Debug, sqlx::FromRow)]
pub struct TaskCounts {
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

/// Provides CRUD operations for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Create a goal for a user.
    ///
    /// `origin` defaults to `user` when the caller does not set one; the
    /// onboarding goal-setting step passes `onboarding` explicitly.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateGoal,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (user_id, title, description, category, priority, origin, target_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.as_deref().unwrap_or("general"))
            .bind(input.priority.as_deref().unwrap_or("medium"))
            .bind(input.origin.as_deref().unwrap_or("user"))
            .bind(input.target_date)
            .fetch_one(pool)
            .await
    }

    /// List a user's goals, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goals WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one goal scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Partial update of a goal.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateGoal,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut param_idx: usize = 3; // $1 id, $2 user_id

        for (present, clause) in [
            (input.title.is_some(), "title"),
            (input.description.is_some(), "description"),
            (input.category.is_some(), "category"),
            (input.status.is_some(), "status"),
            (input.priority.is_some(), "priority"),
            (input.target_date.is_some(), "target_date"),
        ] {
            if present {
                set_clauses.push(format!("{clause} = ${param_idx}"));
                param_idx += 1;
            }
        }

        if set_clauses.is_empty() {
            return Self::find_for_user(pool, id, user_id).await;
        }

        set_clauses.push("updated_at = NOW()".to_string());
        let query = format!(
            "UPDATE goals SET {} WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}",
            set_clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, Goal>(&query).bind(id).bind(user_id);
        if let Some(ref title) = input.title {
            q = q.bind(title);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }
        if let Some(ref category) = input.category {
            q = q.bind(category);
        }
        if let Some(ref status) = input.status {
            q = q.bind(status);
        }
        if let Some(ref priority) = input.priority {
            q = q.bind(priority);
        }
        if let Some(target_date) = input.target_date {
            q = q.bind(target_date);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a goal. Its tasks go with it via the FK cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total and completed tasks for a goal.
    pub async fn task_counts(pool: &PgPool, goal_id: DbId) -> Result<TaskCounts, sqlx::Error> {
        sqlx::query_as::<_, TaskCounts>(
            "SELECT COUNT(*) AS total_tasks, \
                    COUNT(*) FILTER (WHERE is_completed) AS completed_tasks \
             FROM tasks WHERE goal_id = $1",
        )
        .bind(goal_id)
        .fetch_one(pool)
        .await
    }
}
