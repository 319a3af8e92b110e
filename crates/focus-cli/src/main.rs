//! Focus Analyzer CLI - Record browsing activity and analyze your focus.

use clap::Parser;
use focus_cli::commands;
use focus_cli::{Cli, Command, Config, Formatter, JsonFileStore};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> focus_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults when absent
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store = match &cli.store {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default_location()?,
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Track(args) => {
            commands::execute_track(args, &store, &formatter).await?;
        }
        Command::Visit(args) => {
            commands::execute_visit(args, &store, &formatter).await?;
        }
        Command::Logs(args) => {
            commands::execute_logs(args, &store, &formatter).await?;
        }
        Command::Analyze(args) => {
            commands::execute_analyze(args, &store, &config, &formatter).await?;
        }
        Command::Health(args) => {
            commands::execute_health(args, &config, format, &formatter).await?;
        }
    }

    Ok(())
}
