//! HTTP-level integration tests for the onboarding wizard.
//!
//! The current step is always derived server-side from completed-step
//! rows, so these tests exercise ordering, deep-link correction,
//! idempotent completion, and reset.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{assert_error, body_json, create_test_user, get_auth, post_json_auth, token_for};
use compass_db::repositories::OnboardingRepo;

/// Complete a step via the API and assert success.
async fn complete_step(pool: &PgPool, token: &str, step: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/onboarding/steps/{step}/complete"),
        token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "completing {step} failed");
}

/// Fetch onboarding status via the API.
async fn fetch_status(pool: &PgPool, token: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/onboarding/status", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Step resolution
// ---------------------------------------------------------------------------

/// A brand-new user starts at the first step.
#[sqlx::test(migrations = "../db/migrations")]
async fn new_user_starts_at_welcome(pool: PgPool) {
    let user = create_test_user(&pool, "newbie", "free").await;
    let token = token_for(&user);

    let status = fetch_status(&pool, &token).await;

    assert_eq!(status["current_step_index"], 0);
    assert_eq!(status["current_step"], "welcome");
    assert_eq!(status["is_complete"], false);
    assert_eq!(status["steps"].as_array().unwrap().len(), 5);
}

/// Completing steps in order advances the index one at a time.
#[sqlx::test(migrations = "../db/migrations")]
async fn completing_steps_in_order_advances(pool: PgPool) {
    let user = create_test_user(&pool, "orderly", "free").await;
    let token = token_for(&user);

    complete_step(&pool, &token, "welcome").await;
    let status = fetch_status(&pool, &token).await;
    assert_eq!(status["current_step_index"], 1);
    assert_eq!(status["current_step"], "profile");

    complete_step(&pool, &token, "profile").await;
    let status = fetch_status(&pool, &token).await;
    assert_eq!(status["current_step_index"], 2);
    assert_eq!(status["current_step"], "trial_analysis");
}

/// A deep-linked client that completed a later step out of order is
/// still held at its earliest incomplete step.
#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_order_completion_does_not_skip(pool: PgPool) {
    let user = create_test_user(&pool, "deeplinker", "free").await;
    let token = token_for(&user);

    // Jumped straight to plan selection without the earlier steps.
    complete_step(&pool, &token, "plan_selection").await;

    let status = fetch_status(&pool, &token).await;
    assert_eq!(
        status["current_step_index"], 0,
        "the earliest incomplete step wins, not the furthest reached"
    );
    assert_eq!(status["current_step"], "welcome");
    assert_eq!(status["is_complete"], false);
}

/// Completing every step finishes the wizard.
#[sqlx::test(migrations = "../db/migrations")]
async fn completing_all_steps_finishes_wizard(pool: PgPool) {
    let user = create_test_user(&pool, "finisher", "free").await;
    let token = token_for(&user);

    for step in [
        "welcome",
        "profile",
        "trial_analysis",
        "plan_selection",
        "goal_setting",
    ] {
        complete_step(&pool, &token, step).await;
    }

    let status = fetch_status(&pool, &token).await;
    assert_eq!(status["current_step_index"], 5);
    assert!(status["current_step"].is_null());
    assert_eq!(status["is_complete"], true);
}

// ---------------------------------------------------------------------------
// Idempotent completion
// ---------------------------------------------------------------------------

/// Re-completing a step succeeds and leaves exactly one row, with the
/// payload replaced in place.
#[sqlx::test(migrations = "../db/migrations")]
async fn recompleting_a_step_is_idempotent(pool: PgPool) {
    let user = create_test_user(&pool, "doubletap", "free").await;
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/onboarding/steps/profile/complete",
        &token,
        serde_json::json!({ "payload": { "role": "engineer" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/onboarding/steps/profile/complete",
        &token,
        serde_json::json!({ "payload": { "role": "designer" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["payload_json"]["role"], "designer");

    let records = OnboardingRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(records.len(), 1, "re-completion must not create a second row");
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

/// Reset deletes all step records and returns the user to the start.
#[sqlx::test(migrations = "../db/migrations")]
async fn reset_restarts_the_wizard(pool: PgPool) {
    let user = create_test_user(&pool, "restarter", "free").await;
    let token = token_for(&user);

    complete_step(&pool, &token, "welcome").await;
    complete_step(&pool, &token, "profile").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/onboarding/reset", &token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["deleted"], 2);

    let status = fetch_status(&pool, &token).await;
    assert_eq!(status["current_step_index"], 0);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// An unknown step name is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_step_name_returns_400(pool: PgPool) {
    let user = create_test_user(&pool, "badstep", "free").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/onboarding/steps/tutorial/complete",
        &token,
        serde_json::json!({}),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// Status requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn status_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/onboarding/status").await;

    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
