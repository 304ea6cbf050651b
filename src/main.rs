//! Contact Book - Main entry point
//!
//! Runs the interactive command interpreter over stdin/stdout. Logs go to
//! stderr so they never mix with command output.

use anyhow::Result;
use contact_book::{AddressBook, Config, ContactService, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map_or("warn", |cfg| cfg.log_level.as_str());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
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

    info!(
        "Birthday reminder window: {} days",
        config.reminder_window_days
    );

    // The one address book for this session, owned by the service
    let mut service = ContactService::new(
        AddressBook::new(),
        SystemClock,
        config.reminder_window_days,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    contact_book::cli::run(&mut service, &config.prompt, stdin.lock(), stdout.lock())?;

    info!("Contact book session ended");
    Ok(())
}
