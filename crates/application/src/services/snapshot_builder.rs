use chrono::Utc;
use rkn_guard_domain::{hash_domain, normalize_host, Registry};
use std::collections::HashSet;
use tracing::info;

const MAX_SAMPLES: usize = 5;

/// Per-build counters of discarded feed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub accepted: usize,
    pub skipped_empty: usize,
    pub skipped_bad_domain: usize,
    pub skipped_normalize: usize,
}

impl BuildStats {
    pub fn skipped_total(&self) -> usize {
        self.skipped_empty + self.skipped_bad_domain + self.skipped_normalize
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub registry: Registry,
    pub stats: BuildStats,
    /// First few normalized hosts, for log inspection.
    pub samples: Vec<String>,
}

/// Turns a raw domain feed into a registry snapshot.
///
/// Bad entries are counted and dropped; a build never fails as a whole.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build<I, S>(&self, raw_domains: I) -> Snapshot
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let iter = raw_domains.into_iter();
        let mut hashes = Vec::with_capacity(iter.size_hint().0);
        let mut stats = BuildStats::default();
        let mut samples = Vec::with_capacity(MAX_SAMPLES);

        for raw in iter {
            let entry = raw.as_ref().trim().to_lowercase();
            if entry.is_empty() {
                stats.skipped_empty += 1;
                continue;
            }
            // Upstream occasionally ships garbage such as "bad_domain".
            if entry.contains('_') {
                stats.skipped_bad_domain += 1;
                continue;
            }

            let host = match normalize_host(&entry) {
                Ok(host) => host,
                Err(_) => {
                    stats.skipped_normalize += 1;
                    continue;
                }
            };

            if samples.len() < MAX_SAMPLES {
                samples.push(host.clone());
            }
            hashes.push(hash_domain(&host));
            stats.accepted += 1;
        }

        let registry = Registry::new(hashes, Vec::new(), HashSet::new(), Utc::now());

        info!(
            domains = registry.domain_count(),
            accepted = stats.accepted,
            skipped = stats.skipped_total(),
            skipped_empty = stats.skipped_empty,
            skipped_bad_domain = stats.skipped_bad_domain,
            skipped_normalize = stats.skipped_normalize,
            "Registry snapshot built"
        );
        for (i, sample) in samples.iter().enumerate() {
            info!(index = i, domain = %sample, "Registry sample domain");
        }

        Snapshot {
            registry,
            stats,
            samples,
        }
    }
}
