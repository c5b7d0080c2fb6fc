use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::ports::RegistryHolderPort;

/// Maximum snapshot age still reported as ready.
pub const MAX_REGISTRY_AGE_HOURS: i64 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStatus {
    pub domains: usize,
    pub urls: usize,
    pub ips: usize,
    pub created_at: Option<DateTime<Utc>>,
    pub age_secs: Option<i64>,
}

pub struct GetRegistryStatusUseCase {
    holder: Arc<dyn RegistryHolderPort>,
}

impl GetRegistryStatusUseCase {
    pub fn new(holder: Arc<dyn RegistryHolderPort>) -> Self {
        Self { holder }
    }

    pub fn status(&self) -> RegistryStatus {
        self.status_at(Utc::now())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> RegistryStatus {
        let registry = self.holder.get();
        RegistryStatus {
            domains: registry.domain_count(),
            urls: registry.url_hashes().len(),
            ips: registry.ips().len(),
            created_at: registry.created_at(),
            age_secs: registry.age_at(now).map(|age| age.num_seconds()),
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness_at(Utc::now())
    }

    /// Ready iff a snapshot with at least one domain has been published and
    /// it is no older than 48 hours.
    pub fn readiness_at(&self, now: DateTime<Utc>) -> Readiness {
        let registry = self.holder.get();
        if registry.domain_count() == 0 {
            return Readiness::Stale;
        }
        if registry.is_fresh_at(now, Duration::hours(MAX_REGISTRY_AGE_HOURS)) {
            Readiness::Ready
        } else {
            Readiness::Stale
        }
    }
}
