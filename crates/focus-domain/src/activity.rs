//! Activity module - raw log entries and their normalized form

use serde::{Deserialize, Serialize};

/// A single normalized visit: when it happened and which host was active
///
/// Produced by the normalizer. Ordering is the order of the source log; records
/// are never re-sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// ISO-8601 timestamp as supplied by the recorder
    pub timestamp: String,

    /// Hostname of the visited page, or `"unknown"`
    pub domain: String,
}

impl ActivityRecord {
    /// Create a new record
    pub fn new(timestamp: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            domain: domain.into(),
        }
    }
}

/// A log entry as recorded by a tracker
///
/// Trackers always write all three fields, but callers of the relay may send
/// either `domain` or `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO-8601 timestamp of the visit
    pub timestamp: String,

    /// Full URL of the visited page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Hostname of the visited page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl LogEntry {
    /// Create an entry for a visited URL with its already-extracted domain
    pub fn visit(
        timestamp: impl Into<String>,
        url: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            url: Some(url.into()),
            domain: Some(domain.into()),
        }
    }
}
