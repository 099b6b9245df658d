//! List-item text extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::utils::parse_selector_unsafe;

const LIST_ITEM_SELECTOR_STR: &str = "li";

static LIST_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LIST_ITEM_SELECTOR_STR, "LIST_ITEM_SELECTOR"));

/// Extracts the raw candidate tokens from a rendered HTML document.
///
/// For every `<li>` element, each direct text-node child is trimmed and kept
/// if non-empty. Text inside nested elements is ignored. The result is
/// deduplicated; order is irrelevant.
///
/// # Arguments
///
/// * `document` - The rendered HTML source
///
/// # Returns
///
/// The set of trimmed, non-empty direct text nodes. An empty set means the
/// page structure did not match or the page was empty.
pub fn extract_candidates(document: &str) -> HashSet<String> {
    let html = Html::parse_document(document);
    let mut candidates = HashSet::new();

    for list_item in html.select(&LIST_ITEM_SELECTOR) {
        for child in list_item.children() {
            if let Some(text) = child.value().as_text() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    candidates.insert(trimmed.to_string());
                }
            }
        }
    }

    log::debug!(
        "Extracted {} candidate entries from {} bytes of HTML",
        candidates.len(),
        document.len()
    );
    candidates
}
