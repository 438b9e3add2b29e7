//! Route definitions for the `/analyses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::analyses;
use crate::state::AppState;

/// Routes mounted at `/analyses`. All require authentication.
///
/// ```text
/// POST /       -> run_analysis
/// GET  /       -> list_analyses (saved results, paid tiers)
/// GET  /{id}   -> get_analysis
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(analyses::list_analyses).post(analyses::run_analysis),
        )
        .route("/{id}", get(analyses::get_analysis))
}
