use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The user has exhausted their quota for an analysis type. Kept
    /// distinct from `Forbidden` so callers can route to an upgrade
    /// prompt instead of a generic failure.
    #[error("Quota exceeded for {analysis_type}: {used} of {limit} used")]
    QuotaExceeded {
        analysis_type: &'static str,
        used: i32,
        limit: i32,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
