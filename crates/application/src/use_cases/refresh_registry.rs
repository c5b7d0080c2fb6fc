use rkn_guard_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::ports::{RegistryHolderPort, RegistrySource};
use crate::services::{BuildStats, SnapshotBuilder};

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub domains: usize,
    pub stats: BuildStats,
}

/// One fetch-build-publish cycle.
///
/// The whole cycle is bounded by `attempt_timeout`. On any failure the holder
/// keeps its previous snapshot.
pub struct RefreshRegistryUseCase {
    source: Arc<dyn RegistrySource>,
    holder: Arc<dyn RegistryHolderPort>,
    builder: SnapshotBuilder,
    attempt_timeout: Duration,
}

impl RefreshRegistryUseCase {
    pub fn new(source: Arc<dyn RegistrySource>, holder: Arc<dyn RegistryHolderPort>) -> Self {
        Self {
            source,
            holder,
            builder: SnapshotBuilder::new(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    #[instrument(skip(self), name = "registry_refresh")]
    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        let attempt = async {
            let raw = self.source.fetch_raw_domains().await?;
            info!(entries = raw.len(), "Registry feed fetched");
            Ok::<_, DomainError>(self.builder.build(raw))
        };

        let snapshot = tokio::time::timeout(self.attempt_timeout, attempt)
            .await
            .map_err(|_| DomainError::RefreshTimeout(self.attempt_timeout.as_secs()))??;

        let outcome = RefreshOutcome {
            domains: snapshot.registry.domain_count(),
            stats: snapshot.stats,
        };
        self.holder.set(snapshot.registry);

        info!(domains = outcome.domains, "Registry snapshot published");

        Ok(outcome)
    }
}
