//! Logs command implementation.

use crate::cli::{LogsAction, LogsArgs};
use crate::error::Result;
use crate::output::Formatter;
use crate::store::LogStore;
use std::io::{self, Write};

/// Execute the logs command.
pub async fn execute_logs<S: LogStore>(
    args: LogsArgs,
    store: &S,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        LogsAction::Show { limit } => {
            let logs = store.logs()?;
            println!("{}", formatter.format_logs(tail(&logs, limit))?);
        }
        LogsAction::Count => {
            println!("{} activities recorded", store.logs()?.len());
        }
        LogsAction::Clear { yes } => {
            if !yes {
                print!("Clear all recorded activity logs? [y/N] ");
                io::stdout().flush()?;

                let mut response = String::new();
                io::stdin().read_line(&mut response)?;

                if !response.trim().eq_ignore_ascii_case("y") {
                    println!("{}", formatter.info("Operation cancelled"));
                    return Ok(());
                }
            }

            let removed = store.clear_logs()?;
            println!(
                "{}",
                formatter.success(&format!("Cleared {} log entr{}", removed, plural(removed)))
            );
        }
    }

    Ok(())
}

/// The last `limit` entries, or all of them.
fn tail<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n < items.len() => &items[items.len() - n..],
        _ => items,
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::store::JsonFileStore;
    use focus_domain::LogEntry;
    use tempfile::tempdir;

    #[test]
    fn test_tail() {
        let items = [1, 2, 3, 4];
        assert_eq!(tail(&items, None), &[1, 2, 3, 4]);
        assert_eq!(tail(&items, Some(2)), &[3, 4]);
        assert_eq!(tail(&items, Some(10)), &[1, 2, 3, 4]);
        assert!(tail(&items, Some(0)).is_empty());
    }

    #[tokio::test]
    async fn test_clear_with_yes() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        store.set_tracking(true).unwrap();
        store
            .append(LogEntry::visit("t1", "https://x.com", "x.com"))
            .unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let args = LogsArgs {
            action: LogsAction::Clear { yes: true },
        };
        execute_logs(args, &store, &formatter).await.unwrap();

        assert!(store.logs().unwrap().is_empty());
        assert!(store.tracking_enabled().unwrap());
    }
}
