//! Handler for checkout-session creation.
//!
//! The payment provider is an opaque collaborator: we validate the plan,
//! ask for a hosted checkout session, and hand the redirect URL back to
//! the client. Tier changes happen via the provider's webhook, outside
//! this endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use compass_billing::BillingCycle;
use compass_core::error::CoreError;
use compass_core::plan::SubscriptionTier;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /billing/checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub plan: String,
    pub billing_cycle: BillingCycle,
}

// ---------------------------------------------------------------------------
// POST /billing/checkout
// ---------------------------------------------------------------------------

/// Create a checkout session for upgrading to a paid plan.
pub async fn create_checkout(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<impl IntoResponse> {
    let plan = SubscriptionTier::from_str_db(&input.plan)?;

    // There is nothing to buy on the free tier.
    if plan == SubscriptionTier::Free {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot create a checkout session for the free plan".into(),
        )));
    }

    let session = state
        .billing
        .create_checkout_session(auth.user_id, plan, input.billing_cycle)
        .await
        .map_err(|e| AppError::CheckoutFailed(e.to_string()))?;

    tracing::info!(
        user_id = auth.user_id,
        plan = plan.as_str(),
        "Checkout session created"
    );

    Ok(Json(DataResponse { data: session }))
}
