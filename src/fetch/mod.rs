//! Page acquisition.
//!
//! The source page fills in its list with client-side script, so acquisition
//! means rendering the page in a real browser engine and reading back the
//! resulting DOM. `PageAcquirer` is the seam between that I/O and the rest of
//! the pipeline; tests substitute their own implementation.

mod browser;

use std::time::Duration;

use crate::error_handling::FetchError;

pub use browser::ChromiumAcquirer;

/// Renders a page and returns the final document HTML.
///
/// Implementations must bound the render by `timeout` and fail with
/// `FetchError::Timeout` instead of waiting indefinitely. No state is
/// retained between calls.
#[allow(async_fn_in_trait)]
pub trait PageAcquirer {
    /// Renders `url` and returns the serialized document.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
