//! Health command implementation.

use crate::cli::HealthArgs;
use crate::client::RelayClient;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use serde_json::json;

/// Execute the health command.
pub async fn execute_health(
    args: HealthArgs,
    config: &Config,
    format: OutputFormat,
    formatter: &Formatter,
) -> Result<()> {
    let url = args.relay.unwrap_or_else(|| config.relay_url.clone());
    let client = RelayClient::new(url)?;
    let health = client.health().await?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "status": health.status, "timestamp": health.timestamp });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Table => {
            println!(
                "{}",
                formatter.success(&format!(
                    "Relay at {} is {} ({})",
                    client.base_url(),
                    health.status,
                    health.timestamp
                ))
            );
        }
    }

    Ok(())
}
