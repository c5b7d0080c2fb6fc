use chrono::{DateTime, Duration, Utc};
use rustc_hash::FxHasher;
use std::collections::HashSet;
use std::hash::Hasher;

/// 64-bit hash of a normalized host, shared by the snapshot builder and the
/// matcher.
///
/// Collisions are possible in theory and accepted: a false positive requires
/// two distinct hosts with the same 64-bit FxHash.
#[inline]
pub fn hash_domain(host: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(host.as_bytes());
    hasher.finish()
}

/// Immutable blocklist snapshot.
///
/// Hash tables are sorted ascending with no duplicates, which is enforced by
/// every constructor. Nothing mutates a `Registry` once built, so it can be
/// shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    domain_hashes: Vec<u64>,
    url_hashes: Vec<u64>,
    ips: HashSet<String>,
    created_at: Option<DateTime<Utc>>,
}

impl Registry {
    /// Placeholder served before the first successful refresh.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(
        domain_hashes: Vec<u64>,
        url_hashes: Vec<u64>,
        ips: HashSet<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            domain_hashes: sorted_unique(domain_hashes),
            url_hashes: sorted_unique(url_hashes),
            ips,
            created_at: Some(created_at),
        }
    }

    pub fn domain_hashes(&self) -> &[u64] {
        &self.domain_hashes
    }

    /// Reserved for full-URL entries; the current feed never populates it.
    pub fn url_hashes(&self) -> &[u64] {
        &self.url_hashes
    }

    pub fn ips(&self) -> &HashSet<String> {
        &self.ips
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn domain_count(&self) -> usize {
        self.domain_hashes.len()
    }

    #[inline]
    pub fn contains_domain_hash(&self, hash: u64) -> bool {
        self.domain_hashes.binary_search(&hash).is_ok()
    }

    #[inline]
    pub fn contains_ip(&self, canonical_ip: &str) -> bool {
        self.ips.contains(canonical_ip)
    }

    /// Age of the snapshot at `now`, `None` for the placeholder.
    pub fn age_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.created_at.map(|created| now - created)
    }

    /// True when the snapshot was published and is neither older than
    /// `max_age` nor dated in the future.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.age_at(now) {
            Some(age) => age >= Duration::zero() && age <= max_age,
            None => false,
        }
    }
}

fn sorted_unique(mut hashes: Vec<u64>) -> Vec<u64> {
    hashes.sort_unstable();
    hashes.dedup();
    hashes
}
