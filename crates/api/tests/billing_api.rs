//! HTTP-level integration tests for checkout-session creation.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{
    assert_error, body_json, create_test_user, post_json_auth, token_for, MockAnalysis,
    MockCheckout,
};

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// A paid-plan checkout returns the provider's redirect URL.
#[sqlx::test(migrations = "../db/migrations")]
async fn checkout_returns_redirect_url(pool: PgPool) {
    let user = create_test_user(&pool, "buyer", "free").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "plan": "premium", "billing_cycle": "monthly" });
    let response = post_json_auth(app, "/api/v1/billing/checkout", &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let url = json["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("https://checkout.test/"));
    assert!(url.contains("plan=premium"));
    assert!(url.contains("cycle=monthly"));
}

/// There is nothing to buy on the free plan.
#[sqlx::test(migrations = "../db/migrations")]
async fn checkout_for_free_plan_is_rejected(pool: PgPool) {
    let user = create_test_user(&pool, "cheapskate", "free").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "plan": "free", "billing_cycle": "monthly" });
    let response = post_json_auth(app, "/api/v1/billing/checkout", &token, body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// An unknown plan name is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn checkout_for_unknown_plan_is_rejected(pool: PgPool) {
    let user = create_test_user(&pool, "confused", "free").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "plan": "platinum", "billing_cycle": "yearly" });
    let response = post_json_auth(app, "/api/v1/billing/checkout", &token, body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// A provider outage surfaces as 502 CHECKOUT_FAILED.
#[sqlx::test(migrations = "../db/migrations")]
async fn provider_failure_returns_502(pool: PgPool) {
    let user = create_test_user(&pool, "unlucky", "free").await;
    let token = token_for(&user);
    let app =
        common::build_test_app_with(pool, MockAnalysis::succeeding(), MockCheckout::failing());

    let body = serde_json::json!({ "plan": "standard", "billing_cycle": "yearly" });
    let response = post_json_auth(app, "/api/v1/billing/checkout", &token, body).await;

    assert_error(response, StatusCode::BAD_GATEWAY, "CHECKOUT_FAILED").await;
}

/// Checkout requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn checkout_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "plan": "premium", "billing_cycle": "monthly" });
    let response = common::post_json(app, "/api/v1/billing/checkout", body).await;

    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
