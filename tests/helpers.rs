// Shared test helpers: page acquirers that never launch a browser.

use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

use teqsa_blocklist::{Config, FetchError, PageAcquirer};

/// Serves a fixed HTML document.
pub struct StaticPage {
    html: String,
    requests: RefCell<Vec<(String, Duration)>>,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// URLs and timeouts this acquirer was asked for, in order.
    #[allow(dead_code)] // Used by other test files
    pub fn requests(&self) -> Vec<(String, Duration)> {
        self.requests.borrow().clone()
    }
}

impl PageAcquirer for StaticPage {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), timeout));
        Ok(self.html.clone())
    }
}

/// Always reports that the render timed out.
#[allow(dead_code)] // Used by other test files
pub struct TimedOutPage;

impl PageAcquirer for TimedOutPage {
    async fn fetch(&self, _url: &str, timeout: Duration) -> Result<String, FetchError> {
        Err(FetchError::Timeout(timeout))
    }
}

/// Builds a list page from direct-text list items.
#[allow(dead_code)] // Used by other test files
pub fn list_page(items: &[&str]) -> String {
    let list_items: String = items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!("<html><body><ul>{list_items}</ul></body></html>")
}

/// Config that writes into `dir` instead of the working directory.
pub fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// Reads an output file, panicking with its name if missing.
#[allow(dead_code)] // Used by other test files
pub fn read_output(dir: &Path, filename: &str) -> String {
    std::fs::read_to_string(dir.join(filename))
        .unwrap_or_else(|e| panic!("failed to read {filename}: {e}"))
}
