//! Configuration types.
//!
//! `Config` is constructed programmatically; the binary always uses
//! `Config::default()`.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::constants::{DEFAULT_USER_AGENT, OUTPUT_DIR, RENDER_TIMEOUT, SOURCE_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```no_run
/// use teqsa_blocklist::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("lists"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to render and scrape
    pub source_url: String,

    /// Directory the four blocklist files are written to
    pub output_dir: PathBuf,

    /// Bound on the whole browser render
    pub render_timeout: Duration,

    /// User-Agent presented by the headless browser
    pub user_agent: String,

    /// Chromium binary to launch; auto-detected when `None`
    pub chrome_executable: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            render_timeout: RENDER_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chrome_executable: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
