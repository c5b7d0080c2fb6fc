use chrono::Utc;
use rkn_guard_application::ports::RegistryHolderPort;
use rkn_guard_application::use_cases::CheckUrlUseCase;
use rkn_guard_domain::{hash_domain, NormalizeError, Registry};
use std::collections::HashSet;
use std::sync::Arc;

mod helpers;
use helpers::InMemoryHolder;

fn holder_blocking(domains: &[&str], ips: &[&str]) -> Arc<InMemoryHolder> {
    Arc::new(InMemoryHolder::with_registry(Registry::new(
        domains.iter().map(|d| hash_domain(d)).collect(),
        vec![],
        ips.iter().map(|ip| ip.to_string()).collect(),
        Utc::now(),
    )))
}

#[test]
fn test_check_blocked_subdomain() {
    let use_case = CheckUrlUseCase::new(holder_blocking(&["blocked.com"], &[]));

    let verdict = use_case.execute("HTTPS://WWW.Blocked.COM:443/a/../b").unwrap();
    assert!(verdict.blocked);
    assert_eq!(verdict.url.to_string(), "https://www.blocked.com/b");
}

#[test]
fn test_check_not_blocked() {
    let use_case = CheckUrlUseCase::new(holder_blocking(&["blocked.com"], &[]));

    let verdict = use_case.execute("https://notblocked.com/").unwrap();
    assert!(!verdict.blocked);
}

#[test]
fn test_check_blocked_ip() {
    let use_case = CheckUrlUseCase::new(holder_blocking(&[], &["203.0.113.5"]));

    assert!(use_case.execute("http://203.0.113.5/path").unwrap().blocked);
}

#[test]
fn test_check_rejects_malformed_url() {
    let use_case = CheckUrlUseCase::new(holder_blocking(&["blocked.com"], &[]));

    assert_eq!(
        use_case.execute("blocked.com").unwrap_err(),
        NormalizeError::MissingScheme
    );
}

#[test]
fn test_check_placeholder_registry_allows_everything() {
    let use_case = CheckUrlUseCase::new(Arc::new(InMemoryHolder::new()));

    assert!(!use_case.execute("https://blocked.com/").unwrap().blocked);
}

#[test]
fn test_check_observes_new_snapshot() {
    let holder = Arc::new(InMemoryHolder::new());
    let use_case = CheckUrlUseCase::new(holder.clone());

    assert!(!use_case.execute("https://blocked.com/").unwrap().blocked);

    holder.set(Registry::new(
        vec![hash_domain("blocked.com")],
        vec![],
        HashSet::new(),
        Utc::now(),
    ));

    assert!(use_case.execute("https://blocked.com/").unwrap().blocked);
}
