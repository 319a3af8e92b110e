//! Hostname extraction from visited URLs

use url::Url;

/// Sentinel returned when a URL has no recoverable hostname
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Extract the hostname from a URL string
///
/// Returns [`UNKNOWN_DOMAIN`] when the string does not parse as an absolute
/// URL or the URL carries no host. Never panics.
///
/// # Examples
///
/// ```
/// use focus_domain::extract_domain;
///
/// assert_eq!(extract_domain("https://a.b.com/x"), "a.b.com");
/// assert_eq!(extract_domain("not a url"), "unknown");
/// ```
pub fn extract_domain(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().filter(|host| !host.is_empty()).map(str::to_owned))
        .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string())
}
