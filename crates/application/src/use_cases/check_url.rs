use rkn_guard_domain::{is_blocked, normalize, CanonicalUrl, NormalizeError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RegistryHolderPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlVerdict {
    pub url: CanonicalUrl,
    pub blocked: bool,
}

/// Normalizes a caller-supplied URL and matches it against the current
/// snapshot. Synchronous: no suspension points on the request path.
pub struct CheckUrlUseCase {
    holder: Arc<dyn RegistryHolderPort>,
}

impl CheckUrlUseCase {
    pub fn new(holder: Arc<dyn RegistryHolderPort>) -> Self {
        Self { holder }
    }

    #[instrument(skip(self), level = "debug")]
    pub fn execute(&self, raw_url: &str) -> Result<UrlVerdict, NormalizeError> {
        let url = normalize(raw_url)?;
        let registry = self.holder.get();
        let blocked = is_blocked(Some(&registry), &url);

        debug!(url = %url, blocked, "URL checked");

        Ok(UrlVerdict { url, blocked })
    }
}
