//! Utility functions.
//!
//! This module provides compilation helpers for the static CSS selectors and
//! regex patterns used while extracting and cleaning entries.

mod selector;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
