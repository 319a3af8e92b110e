//! Placeholder results for every path that cannot produce a real analysis
//!
//! All constructors are pure: the same input always yields the same value, and
//! no timestamps or request data are embedded.

use focus_domain::{AnalysisResult, ConfidenceLevel};

/// Assessment text used when the caller supplied nothing to analyze
pub const NO_DATA_ASSESSMENT: &str = "No valid activity data was provided for analysis.";

/// Assessment text used when an unexpected failure was contained
pub const INTERNAL_ERROR_ASSESSMENT: &str =
    "An internal error occurred, but the system remained stable.";

/// Fallback naming the stage that failed
///
/// # Examples
///
/// ```
/// use focus_analyzer::fallback;
///
/// let result = fallback::unavailable("HTTP 500");
/// assert_eq!(result.overall_assessment, "Analysis temporarily unavailable (HTTP 500).");
/// assert!(result.is_fallback());
/// ```
pub fn unavailable(reason: &str) -> AnalysisResult {
    with_assessment(format!("Analysis temporarily unavailable ({}).", reason))
}

/// Fallback for an empty or unrecognizable request body
pub fn no_data() -> AnalysisResult {
    with_assessment(NO_DATA_ASSESSMENT.to_string())
}

/// Fallback for failures outside the anticipated taxonomy
pub fn internal_error() -> AnalysisResult {
    with_assessment(INTERNAL_ERROR_ASSESSMENT.to_string())
}

fn with_assessment(overall_assessment: String) -> AnalysisResult {
    AnalysisResult {
        periods: Vec::new(),
        switching_loops: Vec::new(),
        overall_assessment,
        confidence_level: ConfidenceLevel::Low,
        is_fallback: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_data_body() {
        let value = serde_json::to_value(no_data()).unwrap();
        assert_eq!(
            value,
            json!({
                "periods": [],
                "switching_loops": [],
                "overall_assessment": "No valid activity data was provided for analysis.",
                "confidence_level": "low",
                "is_fallback": true
            })
        );
    }

    #[test]
    fn test_reason_is_interpolated() {
        let result = unavailable("Empty Gemini response");
        assert!(result.overall_assessment.contains("Empty Gemini response"));
        assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        assert!(result.periods.is_empty());
        assert!(result.switching_loops.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let first = serde_json::to_string(&unavailable("Gemini failure")).unwrap();
        let second = serde_json::to_string(&unavailable("Gemini failure")).unwrap();
        assert_eq!(first, second);

        let first = serde_json::to_string(&internal_error()).unwrap();
        let second = serde_json::to_string(&internal_error()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_fallback_is_flagged() {
        for result in [no_data(), internal_error(), unavailable("x")] {
            assert_eq!(result.is_fallback, Some(true));
        }
    }
}
