//! Route definitions for goals and their tasks.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{goals, tasks};
use crate::state::AppState;

/// Goal and task routes (mounted at the API root, not nested, because
/// task-scoped operations address tasks by their own id).
///
/// ```text
/// GET    /goals                    -> list_goals
/// POST   /goals                    -> create_goal
/// GET    /goals/{id}               -> get_goal
/// PUT    /goals/{id}               -> update_goal
/// DELETE /goals/{id}               -> delete_goal (cascades tasks)
/// GET    /goals/{id}/progress      -> get_progress
/// GET    /goals/{goal_id}/tasks    -> list_tasks
/// POST   /goals/{goal_id}/tasks    -> create_task
/// PUT    /tasks/{id}               -> update_task
/// DELETE /tasks/{id}               -> delete_task
/// POST   /tasks/{id}/toggle        -> toggle_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/goals", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/goals/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
        .route("/goals/{id}/progress", get(goals::get_progress))
        .route(
            "/goals/{goal_id}/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/tasks/{id}/toggle", post(tasks::toggle_task))
}
