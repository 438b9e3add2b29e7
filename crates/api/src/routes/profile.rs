//! Route definitions for the user profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/user/profile`. All require authentication.
///
/// ```text
/// GET /   -> get_profile (lazy create)
/// PUT /   -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile).put(profile::update_profile))
}
