//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of a `#[sqlx::test]`-provided pool, with the
//! external analysis and checkout collaborators replaced by in-memory
//! mocks so tests never touch the network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use compass_analysis::{AnalysisApiError, AnalysisProvider};
use compass_billing::{BillingApiError, BillingCycle, CheckoutProvider, CheckoutSession};
use compass_core::plan::AnalysisType;
use compass_core::types::DbId;

use compass_api::auth::jwt::{generate_access_token, JwtConfig};
use compass_api::auth::password::hash_password;
use compass_api::config::ServerConfig;
use compass_api::router::build_app_router;
use compass_api::state::AppState;

use compass_db::models::user::{CreateUser, User};
use compass_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret so tokens minted by
/// helpers validate against the app under test.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        analysis_api_url: "http://analysis.invalid".to_string(),
        billing_api_url: "http://billing.invalid".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

// ---------------------------------------------------------------------------
// Mock collaborators
// ---------------------------------------------------------------------------

/// In-memory analysis provider. Returns a canned result (or a canned
/// failure) and counts how many times it was invoked, so tests can assert
/// the gate short-circuits *before* the provider call.
pub struct MockAnalysis {
    fail: bool,
    calls: AtomicUsize,
}

impl MockAnalysis {
    /// A provider that always succeeds with a canned result.
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    /// A provider that always fails with a 500-style upstream error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    /// How many times `analyze` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalysis {
    async fn analyze(
        &self,
        analysis_type: AnalysisType,
        _input_data: &serde_json::Value,
        _user_id: DbId,
    ) -> Result<serde_json::Value, AnalysisApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AnalysisApiError::ApiError {
                status: 500,
                body: "upstream exploded".to_string(),
            });
        }

        Ok(serde_json::json!({
            "summary": format!("mock {} analysis", analysis_type.as_str()),
            "sections": [],
        }))
    }
}

/// In-memory checkout provider.
pub struct MockCheckout {
    fail: bool,
}

impl MockCheckout {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self { fail: false })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { fail: true })
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckout {
    async fn create_checkout_session(
        &self,
        user_id: DbId,
        plan: compass_core::plan::SubscriptionTier,
        cycle: BillingCycle,
    ) -> Result<CheckoutSession, BillingApiError> {
        if self.fail {
            return Err(BillingApiError::ApiError {
                status: 503,
                body: "provider unavailable".to_string(),
            });
        }
        Ok(CheckoutSession {
            url: format!(
                "https://checkout.test/session?user={user_id}&plan={}&cycle={}",
                plan.as_str(),
                cycle.as_str()
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with succeeding mock collaborators.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, MockAnalysis::succeeding(), MockCheckout::succeeding())
}

/// Build the full application router with explicit collaborators.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app_with(
    pool: PgPool,
    analysis: Arc<dyn AnalysisProvider>,
    billing: Arc<dyn CheckoutProvider>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        analysis,
        billing,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// The plaintext password used by all test users.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a test user directly in the database with the given tier.
pub async fn create_test_user(pool: &PgPool, username: &str, tier: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let email = format!("{username}@test.com");
    let input = CreateUser {
        username,
        email: &email,
        password_hash: &hashed,
        subscription_tier: tier,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint a valid access token for a user, matching the test JWT config.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.subscription_tier, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body was not valid JSON: {e}: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Assert a response is an error envelope with the given status and code.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error code: {json}");
}
