//! PSL-aware classification of cleaned URLs.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use log::debug;
use psl::Psl;

use super::clean::clean_url;

/// Outcome of classifying one cleaned URL.
///
/// Exactly one variant applies to any input; an entry is never both an IP and
/// an FQDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A strict dotted-quad IPv4 literal
    Ipv4(Ipv4Addr),
    /// A host under a known public suffix
    Fqdn {
        /// The cleaned URL as scraped (may still carry a path)
        url: String,
        /// The host portion of `url`
        fqdn: String,
        /// Public suffix plus the label immediately before it
        registered_domain: String,
    },
    /// Neither a domain nor an IPv4 address; dropped without error
    Skipped,
}

/// The four deduplicated outputs of a run.
///
/// Sets carry membership only; ordering is applied when they are exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlocklistSets {
    /// Cleaned URLs whose host classified as an FQDN
    pub non_ip_urls: HashSet<String>,
    /// IPv4 literals
    pub ips: HashSet<Ipv4Addr>,
    /// FQDN hosts
    pub fqdns: HashSet<String>,
    /// Registered (apex) domains
    pub registered_domains: HashSet<String>,
}

impl BlocklistSets {
    /// Adds a classified entry to the matching sets. `Skipped` is a no-op.
    pub fn insert(&mut self, classification: Classification) {
        match classification {
            Classification::Ipv4(ip) => {
                self.ips.insert(ip);
            }
            Classification::Fqdn {
                url,
                fqdn,
                registered_domain,
            } => {
                self.non_ip_urls.insert(url);
                self.fqdns.insert(fqdn);
                self.registered_domains.insert(registered_domain);
            }
            Classification::Skipped => {}
        }
    }

    /// True when nothing classified as either an FQDN or an IPv4 address.
    pub fn is_empty(&self) -> bool {
        self.non_ip_urls.is_empty() && self.ips.is_empty()
    }
}

/// Returns the host portion of a cleaned URL.
///
/// Drops any path, query or fragment, any `userinfo@`, any `:port`, and a
/// trailing root dot. The result borrows from `cleaned`.
pub fn host_of(cleaned: &str) -> &str {
    let authority = cleaned
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_port.split(':').next().unwrap_or_default();
    host.strip_suffix('.').unwrap_or(host)
}

/// Rejects hosts with empty labels (`a..com`, `.com`) or embedded whitespace.
fn is_well_formed_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .split('.')
            .all(|label| !label.is_empty() && !label.chars().any(char::is_whitespace))
}

/// Classifies a single cleaned URL.
///
/// The host is decomposed against the PSL. Suffix matching is byte-exact, so
/// an upper-case TLD such as `EDU` is not a known suffix.
///
/// - Known suffix with a preceding label: `Fqdn`
/// - Known suffix alone (e.g. `co.uk`): `Skipped`
/// - Unknown suffix: `Ipv4` if the host is a strict dotted quad, else `Skipped`
pub fn classify_entry(extractor: &psl::List, cleaned: &str) -> Classification {
    let host = host_of(cleaned);
    if !is_well_formed_host(host) {
        return Classification::Skipped;
    }

    match extractor.suffix(host.as_bytes()) {
        Some(suffix) if suffix.is_known() => match extractor.domain(host.as_bytes()) {
            Some(domain) => Classification::Fqdn {
                url: cleaned.to_string(),
                fqdn: host.to_string(),
                registered_domain: String::from_utf8_lossy(domain.as_bytes()).into_owned(),
            },
            None => Classification::Skipped,
        },
        _ => host
            .parse::<Ipv4Addr>()
            .map(Classification::Ipv4)
            .unwrap_or(Classification::Skipped),
    }
}

/// Cleans and classifies every token, collecting the results into sets.
///
/// Skipped tokens are logged at debug level only.
pub fn classify<I, S>(extractor: &psl::List, tokens: I) -> BlocklistSets
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sets = BlocklistSets::default();
    for token in tokens {
        let cleaned = clean_url(token.as_ref());
        let classification = classify_entry(extractor, &cleaned);
        if classification == Classification::Skipped {
            debug!("Skipping entry that is neither a domain nor an IPv4 address: {cleaned:?}");
        }
        sets.insert(classification);
    }
    sets
}
