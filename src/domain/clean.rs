//! Raw token normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_regex_unsafe;

// Zero-width space, non-joiner, joiner, and the BOM / zero-width no-break space
const ZERO_WIDTH_PATTERN: &str = r"[\x{200B}-\x{200D}\x{FEFF}]";
const HTTPS_PREFIX_PATTERN: &str = r"^(?i:https://)";
const HTTP_PREFIX_PATTERN: &str = r"^(?i:http://)";

static ZERO_WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ZERO_WIDTH_PATTERN, "ZERO_WIDTH_RE"));
static HTTPS_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HTTPS_PREFIX_PATTERN, "HTTPS_PREFIX_RE"));
static HTTP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HTTP_PREFIX_PATTERN, "HTTP_PREFIX_RE"));

/// Cleans a raw token scraped from the page.
///
/// Steps, in order:
/// 1. Remove zero-width characters (U+200B..U+200D, U+FEFF) anywhere
/// 2. Trim surrounding whitespace
/// 3. Trim all trailing `/`
/// 4. Strip a leading `https://` (case-insensitive)
/// 5. Strip a leading `http://` (case-insensitive)
///
/// Step 5 runs on the output of step 4, so `https://http://a.com` cleans to
/// `a.com`, while `http://https://a.com` keeps its inner `https://`.
///
/// # Examples
///
/// ```
/// use teqsa_blocklist::domain::clean_url;
///
/// assert_eq!(clean_url("HTTPS://a.com/"), "a.com");
/// assert_eq!(clean_url("HTTP://a.com//"), "a.com");
/// ```
pub fn clean_url(raw: &str) -> String {
    let without_zero_width = ZERO_WIDTH_RE.replace_all(raw, "");
    let trimmed = without_zero_width.trim().trim_end_matches('/');
    let without_https = HTTPS_PREFIX_RE.replace(trimmed, "");
    HTTP_PREFIX_RE.replace(&without_https, "").into_owned()
}
