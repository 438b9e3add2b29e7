//! Client for the external AI analysis endpoint.
//!
//! The endpoint is an opaque collaborator: `{analysis_type, input_data,
//! user_id}` in, a result JSON blob out. The [`AnalysisProvider`] trait is
//! the seam the api crate depends on, so the invocation flow can be
//! exercised in tests with a mock instead of a live endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use compass_core::plan::AnalysisType;
use compass_core::types::DbId;

/// Errors from the analysis provider layer.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Analysis API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider returned 2xx but the body was not the expected shape.
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

/// Seam over the analysis endpoint. Implemented by [`AnalysisApi`] in
/// production and by in-memory mocks in tests.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Run one analysis and return the opaque result JSON.
    async fn analyze(
        &self,
        analysis_type: AnalysisType,
        input_data: &serde_json::Value,
        user_id: DbId,
    ) -> Result<serde_json::Value, AnalysisApiError>;
}

/// Successful response body from the analysis endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    result: serde_json::Value,
}

/// HTTP client for the analysis endpoint.
pub struct AnalysisApi {
    client: reqwest::Client,
    api_url: String,
}

impl AnalysisApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL of the analysis service, e.g.
    ///   `https://analysis.internal`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across collaborators).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl AnalysisProvider for AnalysisApi {
    /// Submit one analysis request.
    ///
    /// Sends `POST /api/openai/analyze` with the analysis type, the raw
    /// input payload, and the acting user's id. A non-2xx status is
    /// surfaced as [`AnalysisApiError::ApiError`]; the caller must not
    /// mutate any state in that case.
    async fn analyze(
        &self,
        analysis_type: AnalysisType,
        input_data: &serde_json::Value,
        user_id: DbId,
    ) -> Result<serde_json::Value, AnalysisApiError> {
        let body = serde_json::json!({
            "analysis_type": analysis_type.as_str(),
            "input_data": input_data,
            "user_id": user_id,
        });

        let response = self
            .client
            .post(format!("{}/api/openai/analyze", self.api_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Analysis endpoint returned an error");
            return Err(AnalysisApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AnalysisApiError::MalformedResponse(e.to_string()))?;

        Ok(parsed.result)
    }
}
