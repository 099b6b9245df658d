//! Blocklist rendering and file output.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;

use crate::config::{
    IPS_FILENAME, PIHOLE_FILENAME, TIMESTAMP_FORMAT, UBL_FILENAME, URLS_FILENAME,
};
use crate::domain::BlocklistSets;
use crate::error_handling::ExportError;

/// One blocklist file, fully rendered and ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlocklist {
    /// File name inside the output directory
    pub filename: &'static str,
    /// What the entries are, for the "written to" log line
    pub label: &'static str,
    /// Number of entries in `body`
    pub count: usize,
    /// Newline-joined entries, no trailing newline
    pub body: String,
}

/// Formats a UTC time as `DD_Mon_YYYY_HH_MM_SS-UTC`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// The current UTC time formatted with `format_timestamp`.
pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

fn sorted_lines<'a>(entries: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    let mut lines: Vec<&str> = entries.into_iter().map(String::as_str).collect();
    lines.sort_unstable();
    lines
}

/// Cleaned URLs, one per line, in lexicographic order.
pub fn render_urls(urls: &HashSet<String>) -> String {
    sorted_lines(urls).join("\n")
}

/// IPv4 literals, one per line, ordered by address value.
pub fn render_ips(ips: &HashSet<Ipv4Addr>) -> String {
    let mut sorted: Vec<Ipv4Addr> = ips.iter().copied().collect();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(Ipv4Addr::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// FQDNs, one per line, in lexicographic order.
pub fn render_fqdns(fqdns: &HashSet<String>) -> String {
    sorted_lines(fqdns).join("\n")
}

/// Registered domains as uBlacklist patterns, ordered by the bare domain.
pub fn render_registered_domains(domains: &HashSet<String>) -> String {
    sorted_lines(domains)
        .into_iter()
        .map(|domain| format!("*://*.{domain}/*"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders all four blocklists in write order.
pub fn render_all(sets: &BlocklistSets) -> Vec<RenderedBlocklist> {
    vec![
        RenderedBlocklist {
            filename: URLS_FILENAME,
            label: "non-IPs",
            count: sets.non_ip_urls.len(),
            body: render_urls(&sets.non_ip_urls),
        },
        RenderedBlocklist {
            filename: IPS_FILENAME,
            label: "IPs",
            count: sets.ips.len(),
            body: render_ips(&sets.ips),
        },
        RenderedBlocklist {
            filename: PIHOLE_FILENAME,
            label: "FQDNs",
            count: sets.fqdns.len(),
            body: render_fqdns(&sets.fqdns),
        },
        RenderedBlocklist {
            filename: UBL_FILENAME,
            label: "Registered Domains",
            count: sets.registered_domains.len(),
            body: render_registered_domains(&sets.registered_domains),
        },
    ]
}

/// Writes each rendered blocklist into `output_dir`, overwriting existing files.
///
/// Logs one info line per file with its count and a UTC timestamp.
///
/// # Errors
///
/// Returns `ExportError::Write` for the first file (or the directory) that
/// cannot be written. Files written before the failure are left in place.
pub fn write_blocklists(
    output_dir: &Path,
    blocklists: &[RenderedBlocklist],
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(blocklists.len());
    for blocklist in blocklists {
        let path = output_dir.join(blocklist.filename);
        std::fs::write(&path, &blocklist.body).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "{} {} written to {} at {}",
            blocklist.count,
            blocklist.label,
            blocklist.filename,
            current_timestamp()
        );
        written.push(path);
    }

    Ok(written)
}
