//! Step Tracker CLI
//!
//! Computes distance, speed and calories burned from step-count records.
//! Results go to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use step_tracker::{
    args::Cli,
    commands::{self, Settings},
    config,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load(cli.config.as_deref())?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Step Tracker"
    );

    let result = Settings::resolve(&cli, config).and_then(|settings| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        commands::run(&cli, &settings, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "step_tracker=info,step_tracker_shared=warn".into()
        } else {
            "step_tracker=debug,step_tracker_shared=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    }
}
