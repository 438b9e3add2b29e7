//! Route definitions for billing.

use axum::routing::post;
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// Routes mounted at `/billing`. All require authentication.
///
/// ```text
/// POST /checkout  -> create_checkout
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", post(billing::create_checkout))
}
