//! Configuration constants.
//!
//! The target page and the output filenames are fixed; the binary never reads
//! them from flags, environment variables or files.

use std::time::Duration;

/// Regulator page listing the blocked cheating websites.
///
/// The list on this page is populated by client-side script, so it must be
/// rendered in a browser rather than fetched with a plain GET.
pub const SOURCE_URL: &str = "https://www.teqsa.gov.au/blocked-illegal-cheating-websites";

/// Upper bound on rendering the source page, from opening the tab to reading
/// the final document. Browser launch and teardown are not included.
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent by the headless browser.
///
/// The target server may serve different markup to clients that do not look
/// like a desktop browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Directory the blocklists are written to.
pub const OUTPUT_DIR: &str = ".";

// Output filenames
/// Cleaned URLs classified as FQDNs.
pub const URLS_FILENAME: &str = "urls.txt";
/// IPv4 literals, sorted numerically.
pub const IPS_FILENAME: &str = "ips.txt";
/// Bare FQDNs for DNS sinkholes such as Pi-hole.
pub const PIHOLE_FILENAME: &str = "urls-pihole.txt";
/// Registered domains as uBlacklist match patterns.
pub const UBL_FILENAME: &str = "urls-UBL.txt";

/// UTC timestamp format used in the "written to" log lines.
pub const TIMESTAMP_FORMAT: &str = "%d_%b_%Y_%H_%M_%S-UTC";
