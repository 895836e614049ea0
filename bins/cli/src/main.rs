//! Coinage CLI
//!
//! Formats, parses, converts and rounds amounts from the command line.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use coinage_shared::config::LoggingConfig;
use coinage_shared::{AppConfig, AppResult};

use crate::commands::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    let config = load_config()?;
    init_tracing(&config.logging);
    debug!(locale = %config.format.locale, "Configuration loaded");

    commands::run(cli.command, &config)
}

fn load_config() -> AppResult<AppConfig> {
    Ok(AppConfig::load()?)
}

/// Logs go to stderr so command output stays machine-readable.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let json = logging.json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text = (!logging.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}
