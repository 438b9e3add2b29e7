pub mod analyses;
pub mod auth;
pub mod billing;
pub mod goals;
pub mod health;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod usage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /user/profile                        get, update (auth required)
///
/// /usage/status                        per-type usage + tier (GET)
///
/// /analyses                            run analysis (POST), list saved (GET)
/// /analyses/{id}                       get saved analysis (GET)
///
/// /onboarding/status                   resolve current step (GET)
/// /onboarding/steps/{step}/complete    mark step complete (POST)
/// /onboarding/reset                    restart the wizard (POST)
///
/// /goals                               list, create
/// /goals/{id}                          get, update, delete
/// /goals/{id}/progress                 completed/total tasks (GET)
/// /goals/{goal_id}/tasks               list, create
/// /tasks/{id}                          update, delete
/// /tasks/{id}/toggle                   flip completion (POST)
///
/// /notifications                       list (?unread_only, limit, offset)
/// /notifications/read-all              mark all read (POST)
/// /notifications/unread-count          unread count (GET)
/// /notifications/{id}/read             mark read (POST)
///
/// /billing/checkout                    create checkout session (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user/profile", profile::router())
        .nest("/usage", usage::router())
        .nest("/analyses", analyses::router())
        .nest("/onboarding", onboarding::router())
        .merge(goals::router())
        .nest("/notifications", notifications::router())
        .nest("/billing", billing::router())
}
