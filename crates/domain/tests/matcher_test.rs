use chrono::Utc;
use rkn_guard_domain::{hash_domain, is_blocked, normalize, CanonicalUrl, Registry, Scheme};
use std::collections::HashSet;

fn registry_with(domains: &[&str], ips: &[&str]) -> Registry {
    Registry::new(
        domains.iter().map(|d| hash_domain(d)).collect(),
        vec![hash_domain("http://blocked.com/path")],
        ips.iter().map(|ip| ip.to_string()).collect(),
        Utc::now(),
    )
}

fn url(host: &str) -> CanonicalUrl {
    CanonicalUrl {
        scheme: Scheme::Https,
        host: host.to_string(),
        path: "/".to_string(),
    }
}

#[test]
fn test_blocked_by_exact_domain() {
    let reg = registry_with(&["blocked.com"], &[]);
    assert!(is_blocked(Some(&reg), &url("blocked.com")));
}

#[test]
fn test_blocked_by_ancestor_domain() {
    let reg = registry_with(&["blocked.com"], &[]);
    assert!(is_blocked(Some(&reg), &url("sub.blocked.com")));
    assert!(is_blocked(Some(&reg), &url("a.b.c.blocked.com")));
}

#[test]
fn test_suffix_without_label_boundary_is_not_blocked() {
    let reg = registry_with(&["blocked.com", "example.com"], &[]);
    assert!(!is_blocked(Some(&reg), &url("notblocked.com")));
    assert!(!is_blocked(Some(&reg), &url("anotherexample.com")));
}

#[test]
fn test_parent_of_blocked_domain_is_not_blocked() {
    let reg = registry_with(&["sub.blocked.com"], &[]);
    assert!(!is_blocked(Some(&reg), &url("blocked.com")));
    assert!(is_blocked(Some(&reg), &url("x.sub.blocked.com")));
}

#[test]
fn test_url_hashes_are_not_matched() {
    let reg = registry_with(&[], &[]);
    let n = normalize("http://blocked.com/path").unwrap();
    assert!(!is_blocked(Some(&reg), &n));
}

#[test]
fn test_unrelated_domain_is_not_blocked() {
    let reg = registry_with(&["blocked.com"], &[]);
    assert!(!is_blocked(Some(&reg), &url("other.com")));
}

#[test]
fn test_ip_blocked_by_canonical_form() {
    let reg = registry_with(&[], &["203.0.113.5", "2001:db8::1"]);

    let n = normalize("http://203.0.113.5/path").unwrap();
    assert!(is_blocked(Some(&reg), &n));

    let n = normalize("http://[2001:0db8:0000::0001]:443/").unwrap();
    assert!(is_blocked(Some(&reg), &n));

    let n = normalize("http://[::ffff:203.0.113.5]/").unwrap();
    assert!(is_blocked(Some(&reg), &n));

    let n = normalize("http://203.0.113.6/").unwrap();
    assert!(!is_blocked(Some(&reg), &n));
}

#[test]
fn test_ip_not_matched_against_domain_table() {
    let reg = registry_with(&["113.5"], &[]);
    let n = normalize("http://203.0.113.5/").unwrap();
    assert!(!is_blocked(Some(&reg), &n));
}

#[test]
fn test_missing_registry_fails_open() {
    assert!(!is_blocked(None, &url("blocked.com")));
}

#[test]
fn test_empty_registry_fails_open() {
    let reg = Registry::empty();
    assert!(!is_blocked(Some(&reg), &url("blocked.com")));

    let no_ips = Registry::new(vec![], vec![], HashSet::new(), Utc::now());
    let n = normalize("http://203.0.113.5/").unwrap();
    assert!(!is_blocked(Some(&no_ips), &n));
}

#[test]
fn test_verdict_is_deterministic() {
    let reg = registry_with(&["blocked.com"], &[]);
    let n = url("deep.sub.blocked.com");
    let first = is_blocked(Some(&reg), &n);
    for _ in 0..100 {
        assert_eq!(is_blocked(Some(&reg), &n), first);
    }
}
