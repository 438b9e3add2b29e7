//! Handlers for the `/analyses` resource.
//!
//! `run_analysis` orchestrates one user-initiated analysis: validate the
//! input, gate on the usage ledger, call the external provider, and only
//! then mutate state (counter increment, optional save, optional
//! onboarding side effect). A failed provider call leaves every row
//! untouched; re-submission is up to the user, never automatic.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use compass_core::analysis::validate_input_data;
use compass_core::error::CoreError;
use compass_core::onboarding::OnboardingStep;
use compass_core::plan::{AnalysisType, SubscriptionTier};
use compass_core::types::DbId;
use compass_core::usage::{status_for, UsageStatus};
use compass_db::models::user::User;
use compass_db::repositories::{AnalysisRepo, OnboardingRepo, UsageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /analyses`.
#[derive(Debug, Deserialize)]
pub struct RunAnalysisRequest {
    pub analysis_type: String,
    pub input_data: serde_json::Value,
    /// Set by the onboarding wizard so a successful run also completes
    /// the `trial_analysis` step.
    #[serde(default)]
    pub from_onboarding: bool,
}

/// Response body for a successful analysis run.
#[derive(Debug, Serialize)]
pub struct RunAnalysisResponse {
    pub analysis_type: AnalysisType,
    /// Opaque result from the analysis provider.
    pub result: serde_json::Value,
    /// Whether the result was persisted (paid tiers only); free-tier
    /// results exist only in this response.
    pub saved: bool,
    /// Row id of the persisted result, when `saved` is true.
    pub saved_id: Option<DbId>,
    /// Post-increment usage for the analysis type that was run.
    pub usage: UsageStatus,
}

// ---------------------------------------------------------------------------
// POST /analyses
// ---------------------------------------------------------------------------

/// Run one analysis for the authenticated user.
pub async fn run_analysis(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RunAnalysisRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Validate the request before touching the network.
    let analysis_type = AnalysisType::from_str_db(&input.analysis_type)?;
    validate_input_data(&input.input_data)?;

    // 2. Resolve the user's current tier (fresh read, not the token claim).
    let (user, tier) = load_user_and_tier(&state, auth.user_id).await?;

    // 3. Quota check. Short-circuits with QUOTA_EXCEEDED before any
    //    provider call is made.
    let counters = UsageRepo::find_for_user(&state.pool, user.id).await?;
    let status = status_for(counters.as_ref(), tier, analysis_type);
    if !status.can_use {
        return Err(AppError::Core(CoreError::QuotaExceeded {
            analysis_type: analysis_type.as_str(),
            used: status.used,
            limit: status.limit,
        }));
    }

    // 4. Call the provider. On failure, surface a generic error and
    //    mutate nothing.
    let result = state
        .analysis
        .analyze(analysis_type, &input.input_data, user.id)
        .await
        .map_err(|e| AppError::AnalysisFailed(e.to_string()))?;

    // 5. Consume quota: exactly one increment, only after confirmed
    //    success. The row is created lazily with tier defaults on the
    //    first ever use.
    UsageRepo::get_or_create(&state.pool, user.id, tier).await?;
    let updated = UsageRepo::increment_used(&state.pool, user.id, analysis_type).await?;

    // 6. Persist the result when the tier allows it.
    let saved_id = if tier.allows_saving() {
        let row = AnalysisRepo::create(&state.pool, user.id, analysis_type, &result).await?;
        Some(row.id)
    } else {
        None
    };

    // 7. Onboarding side effect: an analysis run from the wizard
    //    completes the trial_analysis step (idempotent upsert).
    if input.from_onboarding {
        OnboardingRepo::complete_step(
            &state.pool,
            user.id,
            OnboardingStep::TrialAnalysis,
            &serde_json::json!({ "analysis_type": analysis_type.as_str() }),
        )
        .await?;
    }

    tracing::info!(
        user_id = user.id,
        analysis_type = analysis_type.as_str(),
        saved = saved_id.is_some(),
        "Analysis completed"
    );

    Ok(Json(DataResponse {
        data: RunAnalysisResponse {
            analysis_type,
            result,
            saved: saved_id.is_some(),
            saved_id,
            usage: status_for(Some(&updated), tier, analysis_type),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /analyses
// ---------------------------------------------------------------------------

/// List the authenticated user's saved analyses, newest first.
pub async fn list_analyses(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let analyses = AnalysisRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: analyses }))
}

// ---------------------------------------------------------------------------
// GET /analyses/{id}
// ---------------------------------------------------------------------------

/// Fetch one saved analysis owned by the authenticated user.
pub async fn get_analysis(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let analysis = AnalysisRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Analysis",
            id,
        }))?;
    Ok(Json(DataResponse { data: analysis }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the user row and parse its subscription tier.
async fn load_user_and_tier(
    state: &AppState,
    user_id: DbId,
) -> AppResult<(User, SubscriptionTier)> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    let tier = SubscriptionTier::from_str_db(&user.subscription_tier)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok((user, tier))
}
