//! Built-in sample activity log.
//!
//! A GitHub / Stack Overflow switching loop followed by a Notion focus block.

use focus_domain::LogEntry;

const SAMPLE: &[(&str, &str, &str)] = &[
    ("2025-01-17T14:00:00Z", "https://github.com/user/project", "github.com"),
    ("2025-01-17T14:01:00Z", "https://stackoverflow.com/questions/12345", "stackoverflow.com"),
    ("2025-01-17T14:02:00Z", "https://github.com/user/project", "github.com"),
    ("2025-01-17T14:03:00Z", "https://stackoverflow.com/questions/67890", "stackoverflow.com"),
    ("2025-01-17T14:04:00Z", "https://github.com/user/project", "github.com"),
    ("2025-01-17T14:15:00Z", "https://notion.so/my-project", "notion.so"),
    ("2025-01-17T14:20:00Z", "https://notion.so/my-project", "notion.so"),
    ("2025-01-17T14:25:00Z", "https://notion.so/my-project", "notion.so"),
    ("2025-01-17T14:30:00Z", "https://notion.so/my-project", "notion.so"),
];

/// The nine sample entries.
pub fn sample_logs() -> Vec<LogEntry> {
    SAMPLE
        .iter()
        .map(|(ts, url, domain)| LogEntry::visit(*ts, *url, *domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_domain::extract_domain;

    #[test]
    fn test_sample_shape() {
        let logs = sample_logs();
        assert_eq!(logs.len(), 9);
        assert_eq!(logs[5].domain.as_deref(), Some("notion.so"));
    }

    #[test]
    fn test_sample_domains_match_urls() {
        for entry in sample_logs() {
            let url = entry.url.as_deref().unwrap();
            assert_eq!(entry.domain.as_deref(), Some(extract_domain(url).as_str()));
        }
    }
}
