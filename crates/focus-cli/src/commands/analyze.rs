//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::client::RelayClient;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{ui_url_for, Formatter};
use crate::sample::sample_logs;
use crate::store::LogStore;
use focus_domain::LogEntry;

/// Execute the analyze command.
pub async fn execute_analyze<S: LogStore>(
    args: AnalyzeArgs,
    store: &S,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let logs = select_logs(args.sample, store)?;
    let url = args.relay.unwrap_or_else(|| config.relay_url.clone());
    let client = RelayClient::new(url)?;

    eprintln!(
        "{}",
        formatter.info(&format!("Sending {} activities to {}...", logs.len(), client.base_url()))
    );
    let body = client.analyze(&logs).await?;

    if args.ui_url {
        println!("{}", ui_url_for(&config.ui_url, &body)?);
    } else {
        println!("{}", formatter.format_analysis(&body)?);
    }

    Ok(())
}

/// Pick the sample log or the recorded one; an empty recording is an error.
fn select_logs<S: LogStore>(sample: bool, store: &S) -> Result<Vec<LogEntry>> {
    if sample {
        return Ok(sample_logs());
    }

    let logs = store.logs()?;
    if logs.is_empty() {
        return Err(CliError::NoLogs);
    }
    Ok(logs)
}
