use crate::normalizer::{canonical_ip, CanonicalUrl};
use crate::registry::{hash_domain, Registry};
use std::net::IpAddr;

/// Decides whether `url` is covered by the registry.
///
/// IP hosts are looked up verbatim in the IP set. Domain hosts walk from the
/// full host up through every ancestor (`a.b.example.com`, `b.example.com`,
/// `example.com`, `com`); each level is one binary search over the sorted hash
/// table, so a lookup costs O(labels * log n).
///
/// A missing registry blocks nothing.
pub fn is_blocked(registry: Option<&Registry>, url: &CanonicalUrl) -> bool {
    let Some(registry) = registry else {
        return false;
    };

    if let Ok(ip) = url.host.parse::<IpAddr>() {
        return registry.contains_ip(&canonical_ip(ip));
    }

    let mut host = url.host.as_str();
    loop {
        if registry.contains_domain_hash(hash_domain(host)) {
            return true;
        }
        match host.find('.') {
            Some(dot) => host = &host[dot + 1..],
            None => return false,
        }
    }
}
