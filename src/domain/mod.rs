//! Entry cleaning and classification.
//!
//! Raw list-item text is cleaned into a scheme-less, slash-less URL and then
//! classified against the Public Suffix List (PSL) into exactly one of:
//! - an IPv4 literal
//! - a fully-qualified domain name, paired with its registered (apex) domain
//! - skipped (page boilerplate, bare words, unknown suffixes)
//!
//! Key functions:
//! - `clean_url()` - Normalizes one raw token
//! - `classify_entry()` - Classifies one cleaned URL
//! - `classify()` - Cleans and classifies a batch into `BlocklistSets`

mod classify;
mod clean;

pub use classify::{classify, classify_entry, host_of, BlocklistSets, Classification};
pub use clean::clean_url;
