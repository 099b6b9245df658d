//! Error handling.
//!
//! This module provides the error types for each stage of a run:
//! - **Fetch**: the page could not be rendered, or rendered to nothing usable
//! - **Export**: a blocklist file could not be written
//! - **Initialization**: the logger could not be installed
//!
//! Tokens that classify as neither a domain nor an IPv4 address are not errors;
//! see `domain::Classification::Skipped`.

mod types;

// Re-export public API
pub use types::{BlocklistError, ExportError, FetchError, InitializationError};
