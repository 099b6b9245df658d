//! teqsa_blocklist library: blocklists from the TEQSA blocked cheating websites page
//!
//! This library renders the regulator's page in a headless browser, extracts
//! the blocked entries from its list items, classifies each one as an IPv4
//! address or a fully-qualified domain name (with its registered domain), and
//! writes four blocklist formats:
//!
//! | File | Content |
//! |---|---|
//! | `urls.txt` | cleaned URLs |
//! | `ips.txt` | IPv4 addresses |
//! | `urls-pihole.txt` | FQDNs |
//! | `urls-UBL.txt` | `*://*.<registered domain>/*` patterns |
//!
//! # Example
//!
//! ```no_run
//! use teqsa_blocklist::{run_blocklist, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: PathBuf::from("lists"),
//!     ..Default::default()
//! };
//!
//! let report = run_blocklist(config).await?;
//! println!("Wrote {} files", report.written.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Page acquisition needs a Tokio runtime and a Chromium or Chrome binary
//! that `chromiumoxide` can find (or one set in `Config::chrome_executable`).

#![warn(missing_docs)]

pub mod config;
pub mod domain;
mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod parse;
mod run;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use domain::{BlocklistSets, Classification};
pub use error_handling::{BlocklistError, ExportError, FetchError, InitializationError};
pub use fetch::{ChromiumAcquirer, PageAcquirer};
pub use run::{run_blocklist, run_blocklist_with, RunReport};
