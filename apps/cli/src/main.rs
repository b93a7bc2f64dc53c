//! jokebox Entry Point
//!
//! Uses `anyhow` for startup errors; command failures arrive as
//! `kernel::error::AppError` and are reported with their suggested action.

mod cli;
mod commands;
mod settings;

use clap::Parser;
use cli::Cli;
use jokes::AppError;
use settings::Settings;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays clean for output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jokebox=warn,jokes=warn,platform=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.data_dir.clone())?;

    match commands::run(cli.command, &settings).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            report(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report(err: &AppError) {
    tracing::debug!(kind = %err.kind(), error = ?err, "Command failed");
    eprintln!("Error: {}", err.message());
    if let Some(action) = err.action() {
        eprintln!("  {action}");
    }
}
