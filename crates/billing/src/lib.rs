//! Client for the payment provider's checkout endpoint.
//!
//! The provider is opaque: given a plan and billing cycle it returns a
//! hosted checkout URL to redirect the user to. Webhook-driven tier
//! changes after payment land elsewhere; this crate only creates
//! checkout sessions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use compass_core::plan::SubscriptionTier;
use compass_core::types::DbId;

/// Billing cycle for a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Errors from the billing provider layer.
#[derive(Debug, thiserror::Error)]
pub enum BillingApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Billing API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider returned 2xx but the body was not the expected shape.
    #[error("Malformed checkout response: {0}")]
    MalformedResponse(String),
}

/// A created checkout session: the URL the client should redirect to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSession {
    pub url: String,
}

/// Seam over the payment provider. Implemented by [`BillingApi`] in
/// production and by in-memory mocks in tests.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session for upgrading to `plan`.
    async fn create_checkout_session(
        &self,
        user_id: DbId,
        plan: SubscriptionTier,
        cycle: BillingCycle,
    ) -> Result<CheckoutSession, BillingApiError>;
}

/// HTTP client for the payment provider.
pub struct BillingApi {
    client: reqwest::Client,
    api_url: String,
}

impl BillingApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL of the payment provider proxy.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl CheckoutProvider for BillingApi {
    /// Create a checkout session.
    ///
    /// Sends `POST /checkout/sessions` with the plan id and billing
    /// cycle. A non-2xx status is surfaced as
    /// [`BillingApiError::ApiError`].
    async fn create_checkout_session(
        &self,
        user_id: DbId,
        plan: SubscriptionTier,
        cycle: BillingCycle,
    ) -> Result<CheckoutSession, BillingApiError> {
        let body = serde_json::json!({
            "plan": plan.as_str(),
            "billing_cycle": cycle.as_str(),
            "user_id": user_id,
        });

        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.api_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Checkout endpoint returned an error");
            return Err(BillingApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| BillingApiError::MalformedResponse(e.to_string()))
    }
}
