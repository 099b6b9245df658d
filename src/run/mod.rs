//! The blocklist pipeline.
//!
//! One run is strictly sequential: render the page, extract candidates,
//! classify them, render all four lists in memory, then write the files.
//! Any failure before the write step leaves existing output untouched.

use std::path::PathBuf;

use log::{error, info};

use crate::config::Config;
use crate::domain::{classify, BlocklistSets};
use crate::error_handling::{BlocklistError, FetchError};
use crate::export::{current_timestamp, render_all, write_blocklists};
use crate::fetch::{ChromiumAcquirer, PageAcquirer};
use crate::initialization::init_extractor;
use crate::parse::extract_candidates;

/// Results of a blocklist run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of cleaned URLs written to `urls.txt`
    pub non_ip_urls: usize,
    /// Number of IPv4 addresses written to `ips.txt`
    pub ips: usize,
    /// Number of FQDNs written to `urls-pihole.txt`
    pub fqdns: usize,
    /// Number of registered domains written to `urls-UBL.txt`
    pub registered_domains: usize,
    /// Paths of the files written, in write order
    pub written: Vec<PathBuf>,
    /// UTC time the run finished (`DD_Mon_YYYY_HH_MM_SS-UTC`)
    pub timestamp: String,
}

/// Runs the pipeline with a headless Chromium acquirer built from `config`.
///
/// # Errors
///
/// See `run_blocklist_with`.
///
/// # Example
///
/// ```no_run
/// use teqsa_blocklist::{run_blocklist, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_blocklist(Config::default()).await?;
/// println!("{} FQDNs, {} IPs", report.fqdns, report.ips);
/// # Ok(())
/// # }
/// ```
pub async fn run_blocklist(config: Config) -> Result<RunReport, BlocklistError> {
    let acquirer = ChromiumAcquirer::from_config(&config);
    run_blocklist_with(&acquirer, &config).await
}

/// Runs the pipeline with the given page acquirer.
///
/// # Errors
///
/// - `BlocklistError::Fetch` if the page cannot be rendered in time, or if it
///   contains no list-item text (`FetchError::EmptyContent`)
/// - `BlocklistError::NoClassifiedEntries` if no candidate is a domain or an
///   IPv4 address
/// - `BlocklistError::Export` if a file cannot be written
///
/// The two no-content cases log `"No content available for blocklists."` and
/// write nothing.
pub async fn run_blocklist_with<A: PageAcquirer>(
    acquirer: &A,
    config: &Config,
) -> Result<RunReport, BlocklistError> {
    info!("Fetching {}", config.source_url);
    let document = acquirer
        .fetch(&config.source_url, config.render_timeout)
        .await?;

    let candidates = extract_candidates(&document);
    if candidates.is_empty() {
        error!("No content available for blocklists.");
        return Err(FetchError::EmptyContent.into());
    }
    info!("Found {} candidate entries", candidates.len());

    let extractor = init_extractor();
    let sets = classify(&extractor, &candidates);
    if sets.is_empty() {
        error!("No content available for blocklists.");
        return Err(BlocklistError::NoClassifiedEntries);
    }

    let rendered = render_all(&sets);
    let written = write_blocklists(&config.output_dir, &rendered)?;

    Ok(report(&sets, written))
}

fn report(sets: &BlocklistSets, written: Vec<PathBuf>) -> RunReport {
    RunReport {
        non_ip_urls: sets.non_ip_urls.len(),
        ips: sets.ips.len(),
        fqdns: sets.fqdns.len(),
        registered_domains: sets.registered_domains.len(),
        written,
        timestamp: current_timestamp(),
    }
}
