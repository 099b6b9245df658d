//! HTML parsing for the rendered blocklist page.
//!
//! This module extracts candidate entries from list items. Only the direct
//! text children of each `<li>` are considered, so text belonging to nested
//! links, buttons or formatting elements is never counted twice.

mod html;

pub use html::extract_candidates;
