//! Response types for analysis

use focus_domain::AnalysisResult;
use serde::Serialize;
use serde_json::Value;

/// What the analyzer hands back to the transport layer
///
/// Serializes transparently as the inner value, so both variants produce the
/// same wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// A typed result: validated model output, demo output, or a fallback
    Result(AnalysisResult),

    /// Extracted model output returned verbatim (schema validation disabled)
    Passthrough(Value),
}

impl AnalysisOutcome {
    /// Whether this outcome is a fallback placeholder
    pub fn is_fallback(&self) -> bool {
        match self {
            AnalysisOutcome::Result(result) => result.is_fallback(),
            AnalysisOutcome::Passthrough(value) => value
                .get("is_fallback")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Borrow the typed result, if this outcome carries one
    pub fn as_result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Result(result) => Some(result),
            AnalysisOutcome::Passthrough(_) => None,
        }
    }
}

impl From<AnalysisResult> for AnalysisOutcome {
    fn from(result: AnalysisResult) -> Self {
        AnalysisOutcome::Result(result)
    }
}
