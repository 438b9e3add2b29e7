//! Structural validation of analysis input data.
//!
//! Input data is a JSON object mapping prompt ids to free-text responses.
//! Validation checks presence and shape only; the analysis provider owns
//! any deeper interpretation of the responses.

use crate::error::CoreError;

/// Minimum number of non-empty free-text responses an analysis requires.
pub const MIN_RESPONSES: usize = 2;

/// Validate the input payload for an analysis request.
///
/// The payload must be a JSON object containing at least
/// [`MIN_RESPONSES`] string values that are non-empty after trimming.
/// Non-string values are ignored rather than rejected so clients may
/// attach auxiliary fields alongside the responses.
pub fn validate_input_data(input_data: &serde_json::Value) -> Result<(), CoreError> {
    let obj = input_data.as_object().ok_or_else(|| {
        CoreError::Validation("Analysis input_data must be a JSON object".to_string())
    })?;

    let response_count = obj
        .values()
        .filter_map(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .count();

    if response_count < MIN_RESPONSES {
        return Err(CoreError::Validation(format!(
            "Analysis input requires at least {MIN_RESPONSES} non-empty responses, got {response_count}"
        )));
    }

    Ok(())
}
