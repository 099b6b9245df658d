//! Error type definitions.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors produced while acquiring the rendered page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The page did not finish rendering within the configured bound.
    #[error("Page did not render within {}s", .0.as_secs())]
    Timeout(Duration),

    /// The page rendered, but no list item carried any direct text.
    #[error("No candidate entries found in the rendered page")]
    EmptyContent,

    /// The browser launch configuration was rejected.
    #[error("Invalid browser configuration: {0}")]
    BrowserConfig(String),

    /// The browser process could not be started.
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    /// Navigating to or reading the page failed.
    #[error("Failed to render page: {0}")]
    Navigation(String),
}

/// Errors produced while writing blocklist files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A blocklist file could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Fatal errors for a blocklist run.
///
/// Every variant aborts the run before any output file is touched, except
/// `Export`, which can only occur while writing.
#[derive(Error, Debug)]
pub enum BlocklistError {
    /// Page acquisition failed or yielded no candidates.
    #[error("Page acquisition failed: {0}")]
    Fetch(#[from] FetchError),

    /// Candidates were found but none classified as a domain or an IPv4 address.
    #[error("No entries classified as a domain or IPv4 address")]
    NoClassifiedEntries,

    /// Writing output failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl BlocklistError {
    /// Returns true when the run failed because there was nothing to write.
    pub fn is_no_content(&self) -> bool {
        matches!(
            self,
            BlocklistError::Fetch(FetchError::EmptyContent) | BlocklistError::NoClassifiedEntries
        )
    }
}
