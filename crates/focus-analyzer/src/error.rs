//! Error types for the Analyzer

use thiserror::Error;

/// Reason used when the model answered but no JSON object could be pulled out
pub const UNPARSEABLE_REASON: &str = "Unparseable Gemini output";

/// Reason used when the extracted object does not match the result schema
pub const INVALID_SCHEMA_REASON: &str = "Invalid Gemini output schema";

/// Errors that can occur while producing an analysis
///
/// None of these reach the caller: the analyzer converts each into a
/// fallback result.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Provider call failed; carries the user-facing reason
    #[error("Provider error: {0}")]
    Provider(String),

    /// No JSON object could be extracted from the model text
    #[error("No JSON object found in model output")]
    Unparseable,

    /// Extracted object does not fit the result schema
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// The prompt could not be assembled
    #[error("Prompt error: {0}")]
    Prompt(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Reason string for the fallback, or `None` for internal failures which
    /// use the fixed internal-error message instead
    pub fn fallback_reason(&self) -> Option<String> {
        match self {
            AnalyzerError::Provider(reason) => Some(reason.clone()),
            AnalyzerError::Unparseable => Some(UNPARSEABLE_REASON.to_string()),
            AnalyzerError::Schema(_) => Some(INVALID_SCHEMA_REASON.to_string()),
            AnalyzerError::Prompt(_) => None,
        }
    }
}
