//! Visit recording.

use crate::error::Result;
use crate::store::LogStore;
use chrono::{SecondsFormat, Utc};
use focus_domain::{extract_domain, LogEntry};

/// URL prefixes that are never recorded.
pub const INTERNAL_PREFIXES: &[&str] = &["chrome://", "about:"];

/// What happened to a reported visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The visit was appended to the log
    Recorded(LogEntry),
    /// Tracking is switched off in the store
    TrackingDisabled,
    /// Browser-internal page, or no URL at all
    Skipped,
}

/// Whether a URL belongs to the browser itself.
pub fn is_internal_page(url: &str) -> bool {
    url.is_empty() || INTERNAL_PREFIXES.iter().any(|p| url.starts_with(p))
}

/// Current time in the recorder's timestamp format.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Record a visit to `url` at `timestamp`.
///
/// The tracking flag is read from the store on every call.
pub fn record_visit<S: LogStore + ?Sized>(
    store: &S,
    url: &str,
    timestamp: impl Into<String>,
) -> Result<VisitOutcome> {
    if !store.tracking_enabled()? {
        return Ok(VisitOutcome::TrackingDisabled);
    }
    if is_internal_page(url) {
        return Ok(VisitOutcome::Skipped);
    }

    let entry = LogEntry::visit(timestamp, url, extract_domain(url));
    store.append(entry.clone())?;
    Ok(VisitOutcome::Recorded(entry))
}
