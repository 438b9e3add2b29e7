//! Route definitions for the onboarding wizard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`. All require authentication.
///
/// ```text
/// GET  /status                   -> get_status (DB-derived current step)
/// POST /steps/{step}/complete    -> complete_step (idempotent upsert)
/// POST /reset                    -> reset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(onboarding::get_status))
        .route("/steps/{step}/complete", post(onboarding::complete_step))
        .route("/reset", post(onboarding::reset))
}
