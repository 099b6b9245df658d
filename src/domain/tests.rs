// Domain module tests.

use super::*;
use std::collections::HashSet;
use std::net::Ipv4Addr;

fn test_extractor() -> psl::List {
    psl::List
}

fn fqdn(url: &str, fqdn: &str, registered_domain: &str) -> Classification {
    Classification::Fqdn {
        url: url.to_string(),
        fqdn: fqdn.to_string(),
        registered_domain: registered_domain.to_string(),
    }
}

#[test]
fn test_clean_url_strips_https_case_insensitive() {
    assert_eq!(clean_url("HTTPS://a.com/"), "a.com");
    assert_eq!(clean_url("hTTpS://a.com"), "a.com");
}

#[test]
fn test_clean_url_strips_http_and_all_trailing_slashes() {
    assert_eq!(clean_url("HTTP://a.com//"), "a.com");
    assert_eq!(clean_url("http://a.com///"), "a.com");
}

#[test]
fn test_clean_url_trims_whitespace() {
    assert_eq!(clean_url("  https://Cheat1.EDU/ "), "Cheat1.EDU");
    assert_eq!(clean_url("\tsub.cheat2.org/\n"), "sub.cheat2.org");
}

#[test]
fn test_clean_url_removes_zero_width_characters() {
    assert_eq!(clean_url("\u{200B}essay\u{200C}mill\u{200D}.com\u{FEFF}"), "essaymill.com");
    // A zero-width character hiding the scheme must not stop the strip
    assert_eq!(clean_url("\u{FEFF}https://essaymill.com/"), "essaymill.com");
}

#[test]
fn test_clean_url_is_idempotent() {
    let inputs = [
        "\u{200B}https://essaymill.com/\u{200B}",
        "  HTTP://sub.cheat2.org// ",
        "1.1.1.1",
        "\u{FEFF}Domain",
        "",
    ];
    for input in inputs {
        let once = clean_url(input);
        assert_eq!(clean_url(&once), once, "cleaning {input:?} twice changed it");
    }
}

#[test]
fn test_clean_url_scheme_strip_order() {
    // http:// is stripped from what remains after https://
    assert_eq!(clean_url("https://http://a.com"), "a.com");
    // The reverse nesting keeps its inner https://
    assert_eq!(clean_url("http://https://a.com"), "https://a.com");
}

#[test]
fn test_clean_url_keeps_path() {
    assert_eq!(clean_url("https://a.com/essays/"), "a.com/essays");
}

#[test]
fn test_host_of_strips_path_port_and_userinfo() {
    assert_eq!(host_of("a.com/essays"), "a.com");
    assert_eq!(host_of("a.com:8080"), "a.com");
    assert_eq!(host_of("user@a.com"), "a.com");
    assert_eq!(host_of("a.com?ref=1"), "a.com");
    assert_eq!(host_of("a.com#top"), "a.com");
    assert_eq!(host_of("a.com."), "a.com");
    assert_eq!(host_of(""), "");
}

#[test]
fn test_classify_entry_fqdn() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "malicious.example.com"),
        fqdn("malicious.example.com", "malicious.example.com", "example.com")
    );
}

#[test]
fn test_classify_entry_apex_domain_is_its_own_registered_domain() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "example.com"),
        fqdn("example.com", "example.com", "example.com")
    );
}

#[test]
fn test_classify_entry_multi_part_suffix() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "sub.evil.co.uk"),
        fqdn("sub.evil.co.uk", "sub.evil.co.uk", "evil.co.uk")
    );
}

#[test]
fn test_classify_entry_keeps_path_in_url_only() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "www.example.com/write-my-essay"),
        fqdn("www.example.com/write-my-essay", "www.example.com", "example.com")
    );
}

#[test]
fn test_classify_entry_ipv4() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "1.2.3.4"),
        Classification::Ipv4(Ipv4Addr::new(1, 2, 3, 4))
    );
}

#[test]
fn test_classify_entry_ipv4_with_port() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "10.0.0.1:8080"),
        Classification::Ipv4(Ipv4Addr::new(10, 0, 0, 1))
    );
}

#[test]
fn test_classify_entry_rejects_malformed_ipv4() {
    let extractor = test_extractor();
    assert_eq!(classify_entry(&extractor, "256.1.1.1"), Classification::Skipped);
    assert_eq!(classify_entry(&extractor, "1.2.3"), Classification::Skipped);
    assert_eq!(classify_entry(&extractor, "01.2.3.4"), Classification::Skipped);
}

#[test]
fn test_classify_entry_bare_word_is_skipped() {
    let extractor = test_extractor();
    assert_eq!(classify_entry(&extractor, "Domain"), Classification::Skipped);
}

#[test]
fn test_classify_entry_empty_is_skipped() {
    let extractor = test_extractor();
    assert_eq!(classify_entry(&extractor, ""), Classification::Skipped);
}

#[test]
fn test_classify_entry_unrecognized_suffix_is_skipped() {
    let extractor = test_extractor();
    // Suffix matching is byte-exact against the lower-case list
    assert_eq!(classify_entry(&extractor, "Cheat1.EDU"), Classification::Skipped);
}

#[test]
fn test_classify_entry_bare_suffix_is_skipped() {
    let extractor = test_extractor();
    assert_eq!(classify_entry(&extractor, "co.uk"), Classification::Skipped);
}

#[test]
fn test_classify_entry_rejects_whitespace_and_empty_labels() {
    let extractor = test_extractor();
    assert_eq!(
        classify_entry(&extractor, "Visit example.com"),
        Classification::Skipped
    );
    assert_eq!(classify_entry(&extractor, "a..com"), Classification::Skipped);
    assert_eq!(classify_entry(&extractor, ".com"), Classification::Skipped);
}

#[test]
fn test_classify_builds_all_four_sets() {
    let extractor = test_extractor();
    let sets = classify(
        &extractor,
        ["  https://Cheat1.EDU/ ", "1.1.1.1", "sub.cheat2.org/", "Domain"],
    );

    assert_eq!(sets.ips, HashSet::from([Ipv4Addr::new(1, 1, 1, 1)]));
    assert_eq!(sets.fqdns, HashSet::from(["sub.cheat2.org".to_string()]));
    assert_eq!(
        sets.non_ip_urls,
        HashSet::from(["sub.cheat2.org".to_string()])
    );
    assert_eq!(
        sets.registered_domains,
        HashSet::from(["cheat2.org".to_string()])
    );
    assert!(!sets.is_empty());
}

#[test]
fn test_classify_deduplicates_after_cleaning() {
    let extractor = test_extractor();
    let sets = classify(
        &extractor,
        [
            "https://essays.example.com/",
            "http://essays.example.com",
            "essays.example.com//",
            "www.example.com",
        ],
    );

    assert_eq!(sets.non_ip_urls.len(), 2);
    assert_eq!(sets.fqdns.len(), 2);
    assert_eq!(
        sets.registered_domains,
        HashSet::from(["example.com".to_string()])
    );
}

#[test]
fn test_classify_never_double_counts() {
    let extractor = test_extractor();
    let sets = classify(&extractor, ["8.8.8.8", "dns.google"]);

    assert_eq!(sets.ips.len(), 1);
    assert_eq!(sets.fqdns, HashSet::from(["dns.google".to_string()]));
    assert!(!sets.fqdns.contains("8.8.8.8"));
}

#[test]
fn test_classify_only_boilerplate_is_empty() {
    let extractor = test_extractor();
    let sets = classify(&extractor, ["Home", "Contact us", "\u{200B}"]);
    assert!(sets.is_empty());
    assert!(sets.fqdns.is_empty());
    assert!(sets.registered_domains.is_empty());
}

#[test]
fn test_classify_entry_mixed_case_tld_is_skipped() {
    let extractor = test_extractor();
    // Suffix lookup does not lower-case its input
    assert_eq!(classify_entry(&extractor, "WWW.ESSAYS.COM"), Classification::Skipped);
    assert_eq!(classify_entry(&extractor, "Sub.Cheat2.Org"), Classification::Skipped);
    // A capitalised label before a lower-case suffix is still a domain
    assert_eq!(
        classify_entry(&extractor, "Essays.example.com"),
        fqdn("Essays.example.com", "Essays.example.com", "example.com")
    );
}
