//! daybook - Main entry point
//!
//! This is the executable for the daybook personal assistant, which offers
//! an interactive menu over the contact book and the note book.

use anyhow::Result;
use daybook::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for the REPL)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Data directory: {}", config.data_dir.display());

    // Run the interactive menu (blocks until the user exits)
    repl::run(&config)?;

    info!("daybook shutdown complete");
    Ok(())
}
