//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `teqsa_blocklist` library that handles:
//! - Logger initialization
//! - Exit status on fatal errors
//!
//! The binary takes no flags; the source page and output files are fixed.

use anyhow::{Context, Result};
use std::process;

use teqsa_blocklist::initialization::init_logger_with;
use teqsa_blocklist::{run_blocklist, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::default();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = run_blocklist(config).await;
    log::logger().flush();

    if let Err(e) = outcome {
        // The no-content path has already logged its own error line
        if !e.is_no_content() {
            log::error!("{:#}", e);
            log::logger().flush();
        }
        process::exit(1);
    }

    Ok(())
}
