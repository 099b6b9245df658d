//! Headless Chromium acquisition using chromiumoxide.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use log::{debug, warn};

use super::PageAcquirer;
use crate::config::Config;
use crate::error_handling::FetchError;

/// Launches a fresh headless Chromium per fetch and tears it down afterwards.
#[derive(Debug, Clone)]
pub struct ChromiumAcquirer {
    user_agent: String,
    chrome_executable: Option<PathBuf>,
}

impl ChromiumAcquirer {
    /// Creates an acquirer that presents `user_agent` to the target server.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            chrome_executable: None,
        }
    }

    /// Launches the given Chromium binary instead of auto-detecting one.
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_executable = Some(path.into());
        self
    }

    /// Builds an acquirer from the run configuration.
    pub fn from_config(config: &Config) -> Self {
        let acquirer = Self::new(config.user_agent.clone());
        match &config.chrome_executable {
            Some(path) => acquirer.with_executable(path.clone()),
            None => acquirer,
        }
    }

    fn browser_config(&self) -> Result<BrowserConfig, FetchError> {
        let mut builder = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", self.user_agent));

        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        builder.build().map_err(FetchError::BrowserConfig)
    }
}

impl PageAcquirer for ChromiumAcquirer {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let config = self.browser_config()?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| FetchError::Launch(e.to_string()))?;

        // The CDP connection only makes progress while its handler is polled
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("Rendering {} (timeout {}s)", url, timeout.as_secs());
        let rendered = tokio::time::timeout(timeout, render(&browser, url)).await;

        if let Err(e) = browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = browser.wait().await {
            warn!("Failed to reap browser process: {}", e);
        }
        handler_task.abort();

        match rendered {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        }
    }
}

/// Opens `url` in a new tab, waits for navigation, and serializes the DOM.
async fn render(browser: &Browser, url: &str) -> Result<String, FetchError> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| FetchError::Navigation(e.to_string()))?;

    page.wait_for_navigation()
        .await
        .map_err(|e| FetchError::Navigation(e.to_string()))?;

    let html = page
        .content()
        .await
        .map_err(|e| FetchError::Navigation(e.to_string()))?;

    debug!("Rendered {} bytes from {}", html.len(), url);
    Ok(html)
}
