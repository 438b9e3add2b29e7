//! Handlers for the user profile.
//!
//! The profile row is created lazily on first access via `get_or_create`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use compass_db::models::profile::UpdateProfile;
use compass_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /user/profile
// ---------------------------------------------------------------------------

/// Get the authenticated user's profile, creating an empty one on first
/// access.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: profile }))
}

// ---------------------------------------------------------------------------
// PUT /user/profile
// ---------------------------------------------------------------------------

/// Partially update the authenticated user's profile.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    // Ensure the row exists before updating.
    ProfileRepo::get_or_create(&state.pool, auth.user_id).await?;

    let updated = ProfileRepo::update(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse { data: updated }))
}
