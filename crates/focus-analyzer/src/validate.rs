//! Schema validation for extracted model output

use crate::error::AnalyzerError;
use focus_domain::AnalysisResult;
use serde_json::Value;

/// Check that an extracted JSON value is a well-formed [`AnalysisResult`]
///
/// Beyond the structural shape this enforces `occurrences >= 1` for every
/// switching loop and a finite, non-negative `duration_minutes` for every
/// period.
pub fn validate_analysis(value: Value) -> Result<AnalysisResult, AnalyzerError> {
    let result: AnalysisResult =
        serde_json::from_value(value).map_err(|e| AnalyzerError::Schema(e.to_string()))?;

    for (idx, period) in result.periods.iter().enumerate() {
        if !period.duration_minutes.is_finite() || period.duration_minutes < 0.0 {
            return Err(AnalyzerError::Schema(format!(
                "period {} has invalid duration_minutes {}",
                idx, period.duration_minutes
            )));
        }
    }

    for (idx, switching_loop) in result.switching_loops.iter().enumerate() {
        if switching_loop.occurrences == 0 {
            return Err(AnalyzerError::Schema(format!(
                "switching loop {} has zero occurrences",
                idx
            )));
        }
    }

    Ok(result)
}
