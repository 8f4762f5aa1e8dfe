//! Contact Registry - fixture runner
//!
//! Seeds a fresh registry with the configured phone-number fixture and prints
//! the resulting contacts as JSON on stdout.

use anyhow::{Context, Result};
use contact_registry::config::log_level_or_default;
use contact_registry::{runner, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level_or_default(&config)));

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let phone_numbers = runner::phone_numbers_for(&config)?;
    info!(
        count = phone_numbers.len(),
        repeat_count = config.repeat_count,
        "Seeding contact registry"
    );

    let report = runner::run(&config, &phone_numbers)?;
    info!(inserted = report.inserted, "Fixture run complete");

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
