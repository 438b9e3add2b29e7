//! Handler for the usage status endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use compass_core::error::CoreError;
use compass_core::plan::SubscriptionTier;
use compass_core::usage::{usage_report, UsageStatus};
use compass_db::repositories::{UsageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for `GET /usage/status`.
#[derive(Debug, Serialize)]
pub struct UsageStatusResponse {
    pub subscription_tier: SubscriptionTier,
    pub usage: Vec<UsageStatus>,
}

// ---------------------------------------------------------------------------
// GET /usage/status
// ---------------------------------------------------------------------------

/// Report per-analysis-type usage for the authenticated user.
///
/// A missing counters row is not an error: the ledger falls back to
/// `used = 0` and the tier default limits. The tier is re-read from the
/// users table so a recent upgrade is reflected even while the client
/// still holds an older token.
pub async fn usage_status(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let tier = SubscriptionTier::from_str_db(&user.subscription_tier)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let counters = UsageRepo::find_for_user(&state.pool, auth.user_id).await?;

    let usage = usage_report(counters.as_ref(), tier);

    tracing::debug!(user_id = auth.user_id, tier = tier.as_str(), "Computed usage status");

    Ok(Json(DataResponse {
        data: UsageStatusResponse {
            subscription_tier: tier,
            usage,
        },
    }))
}
