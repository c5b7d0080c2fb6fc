use rkn_guard_domain::Config;
use rkn_guard_infrastructure::registry::{HttpRegistrySource, RegistryHolder};
use std::sync::Arc;
use tracing::info;

pub struct RegistryServices {
    pub holder: Arc<RegistryHolder>,
    pub source: Arc<HttpRegistrySource>,
}

impl RegistryServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let source = HttpRegistrySource::new(
            &config.registry.base_url,
            config.registry.request_timeout(),
        )?;

        info!(url = %source.domains_url(), "Registry source configured");

        Ok(Self {
            holder: Arc::new(RegistryHolder::new()),
            source: Arc::new(source),
        })
    }
}
