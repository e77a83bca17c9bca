//! Contact Assistant - Main entry point
//!
//! Interactive command-line assistant over an in-memory address book.

use anyhow::Result;
use contact_assistant::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so the interactive session owns stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!("Starting contact assistant");

    if let Err(e) = repl::run(&config) {
        error!("Interactive loop failed: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
