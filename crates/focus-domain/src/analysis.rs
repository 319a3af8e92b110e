//! Analysis module - the result schema surfaced to every caller

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// How confident the analysis is in its own interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Weak evidence, or a fallback result
    Low,
    /// Moderate evidence
    Medium,
    /// Strong evidence
    High,
}

impl ConfidenceLevel {
    /// Get the level name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a work period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Sustained attention on a small set of domains
    Focus,
    /// Frequent switching between domains
    Fragmented,
}

impl PeriodKind {
    /// Get the kind name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Focus => "focus",
            PeriodKind::Fragmented => "fragmented",
        }
    }
}

/// A contiguous span of activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Timestamp where the period starts
    #[serde(rename = "startTime")]
    pub start_time: String,

    /// Timestamp where the period ends
    #[serde(rename = "endTime")]
    pub end_time: String,

    /// Focus or fragmented
    #[serde(rename = "type")]
    pub kind: PeriodKind,

    /// Length of the period in minutes
    pub duration_minutes: f64,

    /// Domains that dominated the period, most significant first
    pub primary_domains: Vec<String>,

    /// Human-readable interpretation
    pub explanation: String,
}

/// A repeated alternation between domains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchingLoop {
    /// Domains participating in the loop, in alternation order
    pub domains: Vec<String>,

    /// How many times the loop was observed (at least 1)
    #[serde(deserialize_with = "whole_count")]
    pub occurrences: u32,

    /// Probable reason for the switching
    pub likely_cause: String,
}

/// The structured interpretation of an activity timeline
///
/// Every path through the relay produces a value of this shape. `is_fallback`
/// is only present on placeholder results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Work periods in chronological order
    pub periods: Vec<Period>,

    /// Switching loops in order of discovery
    pub switching_loops: Vec<SwitchingLoop>,

    /// Summary paragraph
    pub overall_assessment: String,

    /// Self-reported confidence
    pub confidence_level: ConfidenceLevel,

    /// Set to `true` when this is a placeholder rather than a real analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
}

impl AnalysisResult {
    /// Whether this result is a placeholder
    pub fn is_fallback(&self) -> bool {
        self.is_fallback.unwrap_or(false)
    }
}

/// Accept any integral JSON number (`2` or `2.0`) as a count
fn whole_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&raw) {
        Ok(raw as u32)
    } else {
        Err(de::Error::custom(format!(
            "expected a whole non-negative count, got {}",
            raw
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_wire_names() {
        let period = Period {
            start_time: "2025-01-17T14:00:00Z".to_string(),
            end_time: "2025-01-17T14:04:00Z".to_string(),
            kind: PeriodKind::Fragmented,
            duration_minutes: 4.0,
            primary_domains: vec!["github.com".to_string()],
            explanation: "Rapid switching".to_string(),
        };

        let value = serde_json::to_value(&period).unwrap();
        assert_eq!(value["startTime"], "2025-01-17T14:00:00Z");
        assert_eq!(value["endTime"], "2025-01-17T14:04:00Z");
        assert_eq!(value["type"], "fragmented");
        assert!(value.get("start_time").is_none());
    }

    #[test]
    fn test_is_fallback_omitted_when_absent() {
        let result = AnalysisResult {
            periods: vec![],
            switching_loops: vec![],
            overall_assessment: "ok".to_string(),
            confidence_level: ConfidenceLevel::High,
            is_fallback: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("is_fallback"));
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_rejects_unknown_confidence_level() {
        let json = r#"{
            "periods": [],
            "switching_loops": [],
            "overall_assessment": "ok",
            "confidence_level": "certain"
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_rejects_missing_assessment() {
        let json = r#"{"periods": [], "switching_loops": [], "confidence_level": "low"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(ConfidenceLevel::Medium.to_string(), "medium");
        assert_eq!(PeriodKind::Focus.as_str(), "focus");
    }

    #[test]
    fn test_occurrences_accepts_integral_floats() {
        let json = r#"{"domains": ["a.com", "b.com"], "occurrences": 2.0, "likely_cause": "x"}"#;
        let parsed: SwitchingLoop = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.occurrences, 2);

        let json = r#"{"domains": [], "occurrences": 3, "likely_cause": "x"}"#;
        assert_eq!(serde_json::from_str::<SwitchingLoop>(json).unwrap().occurrences, 3);
    }

    #[test]
    fn test_occurrences_rejects_fractions_and_negatives() {
        for raw in ["2.5", "-1", "\"2\""] {
            let json = format!(r#"{{"domains": [], "occurrences": {}, "likely_cause": "x"}}"#, raw);
            assert!(serde_json::from_str::<SwitchingLoop>(&json).is_err(), "{}", raw);
        }
    }
}
