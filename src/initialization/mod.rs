//! Application initialization.
//!
//! This module provides functions to set up the process-wide resources:
//! - Logger (env_logger with plain or JSON formatting)
//! - Public Suffix List extractor

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// The list is compiled into the binary, so construction never fails and
/// never touches the network.
pub fn init_extractor() -> psl::List {
    psl::List
}
