use std::sync::Arc;

use compass_analysis::AnalysisProvider;
use compass_billing::CheckoutProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: compass_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI analysis provider (HTTP client in production, mock in tests).
    pub analysis: Arc<dyn AnalysisProvider>,
    /// Payment checkout provider (HTTP client in production, mock in tests).
    pub billing: Arc<dyn CheckoutProvider>,
}
