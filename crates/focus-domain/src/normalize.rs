//! Normalization of heterogeneous activity logs into [`ActivityRecord`]s

use crate::activity::ActivityRecord;
use crate::domain::extract_domain;
use serde_json::Value;

/// Field under which a wrapped payload carries its log sequence
pub const LOGS_FIELD: &str = "logs";

/// Resolve the log sequence from a request payload
///
/// Accepts a bare array or an object wrapping the array under `logs`.
/// Returns `None` when neither shape is present or the sequence is empty;
/// callers treat that as "no data", not as an error.
pub fn resolve_log_sequence(payload: &Value) -> Option<&[Value]> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(map) => map.get(LOGS_FIELD)?.as_array()?,
        _ => return None,
    };

    if entries.is_empty() {
        None
    } else {
        Some(entries.as_slice())
    }
}

/// Map every log entry to an [`ActivityRecord`], preserving order and length
///
/// A non-empty string `domain` is used as-is; otherwise the domain is derived
/// from `url`. Entries missing both (or that are not objects) get
/// `"unknown"`. A missing or non-string `timestamp` becomes an empty string.
pub fn normalize_entries(entries: &[Value]) -> Vec<ActivityRecord> {
    entries.iter().map(normalize_entry).collect()
}

fn normalize_entry(entry: &Value) -> ActivityRecord {
    let timestamp = entry
        .get("timestamp")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let domain = match entry.get("domain").and_then(Value::as_str) {
        Some(domain) if !domain.is_empty() => domain.to_string(),
        _ => extract_domain(entry.get("url").and_then(Value::as_str).unwrap_or_default()),
    };

    ActivityRecord::new(timestamp, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_resolve_bare_array() {
        let payload = json!([{"timestamp": "t1", "domain": "x.com"}]);
        assert_eq!(resolve_log_sequence(&payload).map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_resolve_wrapped_array() {
        let payload = json!({"logs": [{"timestamp": "t1"}, {"timestamp": "t2"}]});
        assert_eq!(resolve_log_sequence(&payload).map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_resolve_rejects_empty_and_wrong_shapes() {
        assert!(resolve_log_sequence(&json!([])).is_none());
        assert!(resolve_log_sequence(&json!({"logs": []})).is_none());
        assert!(resolve_log_sequence(&json!({"logs": "nope"})).is_none());
        assert!(resolve_log_sequence(&json!({"entries": [1]})).is_none());
        assert!(resolve_log_sequence(&json!("logs")).is_none());
        assert!(resolve_log_sequence(&Value::Null).is_none());
    }

    #[test]
    fn test_derives_domain_from_url() {
        let entries = vec![json!({"timestamp": "t1", "url": "https://x.com/p"})];
        assert_eq!(
            normalize_entries(&entries),
            vec![ActivityRecord::new("t1", "x.com")]
        );
    }

    #[test]
    fn test_prefers_supplied_domain() {
        let entries = vec![json!({
            "timestamp": "t1",
            "url": "https://github.com/user/project",
            "domain": "custom.example"
        })];
        assert_eq!(normalize_entries(&entries)[0].domain, "custom.example");
    }

    #[test]
    fn test_empty_domain_falls_back_to_url() {
        let entries = vec![json!({"timestamp": "t1", "domain": "", "url": "https://x.com"})];
        assert_eq!(normalize_entries(&entries)[0].domain, "x.com");
    }

    #[test]
    fn test_malformed_entries_are_kept() {
        let entries = vec![json!(42), json!({"url": "garbage"})];
        let records = normalize_entries(&entries);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ActivityRecord::new("", "unknown"));
        assert_eq!(records[1], ActivityRecord::new("", "unknown"));
    }

    #[test]
    fn test_serialized_record_carries_only_timestamp_and_domain() {
        let entries = vec![json!({"timestamp": "t1", "url": "https://x.com/p"})];
        let value = serde_json::to_value(normalize_entries(&entries)).unwrap();
        assert_eq!(value, json!([{"timestamp": "t1", "domain": "x.com"}]));
    }

    proptest! {
        #[test]
        fn prop_preserves_length_and_order(stamps in proptest::collection::vec("[0-9T:-]{0,20}", 0..32)) {
            let entries: Vec<Value> = stamps
                .iter()
                .map(|ts| json!({"timestamp": ts, "url": "https://example.com"}))
                .collect();
            let records = normalize_entries(&entries);
            prop_assert_eq!(records.len(), stamps.len());
            for (record, ts) in records.iter().zip(stamps.iter()) {
                prop_assert_eq!(&record.timestamp, ts);
            }
        }
    }
}
