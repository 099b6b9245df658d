//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed constants (source page, output filenames, timeouts)
//! - The library `Config` struct and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
