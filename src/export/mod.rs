//! Blocklist export.
//!
//! Renders each `BlocklistSet` into its downstream file format and writes the
//! files:
//! - `urls.txt`: cleaned URLs, lexicographic
//! - `ips.txt`: IPv4 literals, numeric
//! - `urls-pihole.txt`: FQDNs, lexicographic
//! - `urls-UBL.txt`: registered domains as `*://*.<domain>/*`, lexicographic by domain

mod blocklist;

pub use blocklist::{
    current_timestamp, format_timestamp, render_all, render_fqdns, render_ips,
    render_registered_domains, render_urls, write_blocklists, RenderedBlocklist,
};
