//! Static analysis for demo mode
//!
//! Lets the relay be presented without network access or an API key. Period
//! boundaries are taken from the submitted log where it is long enough.

use focus_domain::{
    ActivityRecord, AnalysisResult, ConfidenceLevel, Period, PeriodKind, SwitchingLoop,
};

fn timestamp_at(records: &[ActivityRecord], idx: usize, default: &str) -> String {
    records
        .get(idx)
        .map(|record| record.timestamp.clone())
        .unwrap_or_else(|| default.to_string())
}

/// Build the demo analysis for the given records
pub fn demo_analysis(records: &[ActivityRecord]) -> AnalysisResult {
    AnalysisResult {
        periods: vec![
            Period {
                start_time: timestamp_at(records, 0, "2025-01-17T14:00:00Z"),
                end_time: timestamp_at(records, 4, "2025-01-17T14:04:00Z"),
                kind: PeriodKind::Fragmented,
                duration_minutes: 4.0,
                primary_domains: vec!["github.com".to_string(), "stackoverflow.com".to_string()],
                explanation: "Rapid switching between GitHub and Stack Overflow likely suggests \
                              active debugging or problem-solving."
                    .to_string(),
            },
            Period {
                start_time: timestamp_at(records, 5, "2025-01-17T14:15:00Z"),
                end_time: timestamp_at(records, 8, "2025-01-17T14:30:00Z"),
                kind: PeriodKind::Focus,
                duration_minutes: 15.0,
                primary_domains: vec!["notion.so".to_string()],
                explanation: "Sustained attention on Notion suggests documentation or planning work."
                    .to_string(),
            },
        ],
        switching_loops: vec![SwitchingLoop {
            domains: vec!["github.com".to_string(), "stackoverflow.com".to_string()],
            occurrences: 3,
            likely_cause: "Typical development workflow: alternating between code and \
                           reference materials."
                .to_string(),
        }],
        overall_assessment: "Session shows a healthy mix of focused work and research. The \
                             switching pattern suggests productive problem-solving behavior."
            .to_string(),
        confidence_level: ConfidenceLevel::Medium,
        is_fallback: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_record_timestamps() {
        let records: Vec<_> = (0..9)
            .map(|i| ActivityRecord::new(format!("ts-{}", i), "example.com"))
            .collect();
        let result = demo_analysis(&records);
        assert_eq!(result.periods[0].start_time, "ts-0");
        assert_eq!(result.periods[0].end_time, "ts-4");
        assert_eq!(result.periods[1].start_time, "ts-5");
        assert_eq!(result.periods[1].end_time, "ts-8");
    }

    #[test]
    fn test_short_log_uses_defaults() {
        let records = vec![ActivityRecord::new("only", "example.com")];
        let result = demo_analysis(&records);
        assert_eq!(result.periods[0].start_time, "only");
        assert_eq!(result.periods[0].end_time, "2025-01-17T14:04:00Z");
        assert_eq!(result.periods[1].end_time, "2025-01-17T14:30:00Z");
    }

    #[test]
    fn test_demo_is_not_a_fallback() {
        let result = demo_analysis(&[]);
        assert!(!result.is_fallback());
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
    }
}
