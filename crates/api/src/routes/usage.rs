//! Route definitions for usage status.

use axum::routing::get;
use axum::Router;

use crate::handlers::usage;
use crate::state::AppState;

/// Routes mounted at `/usage`. All require authentication.
///
/// ```text
/// GET /status  -> usage_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(usage::usage_status))
}
