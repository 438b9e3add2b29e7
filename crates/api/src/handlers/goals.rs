//! Handlers for the `/goals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use compass_core::error::CoreError;
use compass_core::goal::{goal_progress, GoalOrigin, GoalPriority, GoalStatus};
use compass_core::types::DbId;
use compass_db::models::goal::{CreateGoal, UpdateGoal};
use compass_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /goals
// ---------------------------------------------------------------------------

/// List the authenticated user's goals, newest first.
pub async fn list_goals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

// ---------------------------------------------------------------------------
// POST /goals
// ---------------------------------------------------------------------------

/// Create a goal. Origin is taken from the request when present
/// (`onboarding` for wizard-created goals) and defaults to `user`.
pub async fn create_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Goal title must not be empty".into(),
        )));
    }
    if let Some(ref priority) = input.priority {
        GoalPriority::from_str_db(priority)?;
    }
    if let Some(ref origin) = input.origin {
        GoalOrigin::from_str_db(origin)?;
    }

    let goal = GoalRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, goal_id = goal.id, "Goal created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

// ---------------------------------------------------------------------------
// GET /goals/{id}
// ---------------------------------------------------------------------------

pub async fn get_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;
    Ok(Json(DataResponse { data: goal }))
}

// ---------------------------------------------------------------------------
// PUT /goals/{id}
// ---------------------------------------------------------------------------

/// Partial update of a goal.
pub async fn update_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        GoalStatus::from_str_db(status)?;
    }
    if let Some(ref priority) = input.priority {
        GoalPriority::from_str_db(priority)?;
    }
    if let Some(ref title) = input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Goal title must not be empty".into(),
            )));
        }
    }

    let goal = GoalRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

    Ok(Json(DataResponse { data: goal }))
}

// ---------------------------------------------------------------------------
// DELETE /goals/{id}
// ---------------------------------------------------------------------------

/// Delete a goal and (via FK cascade) all of its tasks.
pub async fn delete_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GoalRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Goal", id }));
    }

    tracing::info!(user_id = auth.user_id, goal_id = id, "Goal deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /goals/{id}/progress
// ---------------------------------------------------------------------------

/// Completed/total task arithmetic for one goal.
pub async fn get_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Ownership check before counting.
    GoalRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

    let counts = GoalRepo::task_counts(&state.pool, id).await?;
    let progress = goal_progress(counts.completed_tasks, counts.total_tasks);

    Ok(Json(DataResponse { data: progress }))
}
