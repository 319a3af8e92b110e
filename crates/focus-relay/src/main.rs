//! Focus Analyzer Relay CLI
//!
//! Starts the Relay HTTP server.

use focus_relay::{config::RelayConfig, start_server, RelayError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (RUST_LOG, default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RelayError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RelayConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        RelayConfig::default()
    };

    start_server(config.with_env_overrides()?).await?;

    Ok(())
}

fn print_help() {
    println!("Focus Analyzer Relay - LLM analysis of browser activity");
    println!();
    println!("USAGE:");
    println!("    focus-relay [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 3001)");
    println!("    - gemini_api_key, gemini_model, gemini_base_url");
    println!("    - request_timeout_secs: Outbound timeout (default: transport default)");
    println!("    - demo_mode: Return a static analysis (default false)");
    println!("    - strict_schema: Validate model output (default true)");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT, GEMINI_API_KEY, GEMINI_MODEL, FOCUS_DEMO_MODE override the file");
    println!("    RUST_LOG sets the log filter (default 'info')");
    println!();
}
