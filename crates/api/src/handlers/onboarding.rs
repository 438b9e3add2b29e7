//! Handlers for the onboarding wizard.
//!
//! The current step is always derived from the completed-step rows; a
//! client that jumped ahead via deep link gets corrected to its true
//! earliest incomplete step on the next status fetch.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use compass_core::onboarding::{
    resolve_current_step, OnboardingStep, COMPLETE_INDEX, STEP_ORDER,
};
use compass_db::models::onboarding::OnboardingStepRecord;
use compass_db::repositories::OnboardingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for step completion. The payload is opaque wizard state
/// stored alongside the step record.
#[derive(Debug, Deserialize)]
pub struct CompleteStepRequest {
    #[serde(default = "default_payload")]
    pub payload: serde_json::Value,
}

fn default_payload() -> serde_json::Value {
    serde_json::json!({})
}

/// Response body for `GET /onboarding/status`.
#[derive(Debug, Serialize)]
pub struct OnboardingStatusResponse {
    /// 0-based index of the step to present; equals `steps.len()` once
    /// the wizard is finished.
    pub current_step_index: usize,
    /// The step to present, `None` when the wizard is complete.
    pub current_step: Option<OnboardingStep>,
    pub is_complete: bool,
    /// The full ordered vocabulary, for clients rendering a progress bar.
    pub steps: Vec<OnboardingStep>,
    /// Raw step records (completed or merely reached).
    pub records: Vec<OnboardingStepRecord>,
}

// ---------------------------------------------------------------------------
// GET /onboarding/status
// ---------------------------------------------------------------------------

/// Resolve the authenticated user's current onboarding step.
pub async fn get_status(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = OnboardingRepo::list_for_user(&state.pool, auth.user_id).await?;

    // Only rows with a non-null completed_at count as completed.
    let completed: Vec<OnboardingStep> = records
        .iter()
        .filter(|r| r.completed_at.is_some())
        .filter_map(|r| OnboardingStep::from_str_db(&r.step_name).ok())
        .collect();

    let index = resolve_current_step(&completed);

    tracing::debug!(user_id = auth.user_id, step_index = index, "Resolved onboarding step");

    Ok(Json(DataResponse {
        data: OnboardingStatusResponse {
            current_step_index: index,
            current_step: STEP_ORDER.get(index).copied(),
            is_complete: index == COMPLETE_INDEX,
            steps: STEP_ORDER.to_vec(),
            records,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /onboarding/steps/{step}/complete
// ---------------------------------------------------------------------------

/// Mark a step complete. Safe under repeated calls: the record is
/// upserted by (user, step name), so re-completing updates the existing
/// row's `completed_at` rather than inserting a duplicate.
pub async fn complete_step(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(step): Path<String>,
    Json(input): Json<CompleteStepRequest>,
) -> AppResult<impl IntoResponse> {
    let step = OnboardingStep::from_str_db(&step)?;

    let record =
        OnboardingRepo::complete_step(&state.pool, auth.user_id, step, &input.payload).await?;

    tracing::info!(user_id = auth.user_id, step = step.as_str(), "Onboarding step completed");

    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// POST /onboarding/reset
// ---------------------------------------------------------------------------

/// Delete all of the user's step records, restarting the wizard.
pub async fn reset(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let deleted = OnboardingRepo::reset(&state.pool, auth.user_id).await?;

    tracing::info!(user_id = auth.user_id, deleted, "Onboarding reset");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": deleted }),
    }))
}
