//! Handlers for tasks (nested under goals, plus task-scoped operations).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use compass_core::error::CoreError;
use compass_core::types::DbId;
use compass_db::models::task::{CreateTask, UpdateTask};
use compass_db::repositories::{GoalRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /goals/{goal_id}/tasks
// ---------------------------------------------------------------------------

pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Ownership check: the goal must belong to the caller.
    GoalRepo::find_for_user(&state.pool, goal_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Goal",
            id: goal_id,
        }))?;

    let tasks = TaskRepo::list_for_goal(&state.pool, goal_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

// ---------------------------------------------------------------------------
// POST /goals/{goal_id}/tasks
// ---------------------------------------------------------------------------

pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Task title must not be empty".into(),
        )));
    }

    GoalRepo::find_for_user(&state.pool, goal_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Goal",
            id: goal_id,
        }))?;

    let task = TaskRepo::create(&state.pool, goal_id, auth.user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

// ---------------------------------------------------------------------------
// PUT /tasks/{id}
// ---------------------------------------------------------------------------

pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    let title = input.title.as_deref().unwrap_or_default();
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Task title must not be empty".into(),
        )));
    }

    let task = TaskRepo::update_title(&state.pool, id, auth.user_id, title)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(DataResponse { data: task }))
}

// ---------------------------------------------------------------------------
// POST /tasks/{id}/toggle
// ---------------------------------------------------------------------------

/// Flip completion state; `completed_at` follows the flag.
pub async fn toggle_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::toggle_completed(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(DataResponse { data: task }))
}

// ---------------------------------------------------------------------------
// DELETE /tasks/{id}
// ---------------------------------------------------------------------------

pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
