use super::RegistryServices;
use rkn_guard_api::AppState;
use rkn_guard_application::use_cases::{
    CheckUrlUseCase, GetRegistryStatusUseCase, RefreshRegistryUseCase,
};
use rkn_guard_domain::Config;
use rkn_guard_jobs::{Backoff, RegistryUpdateJob};
use std::sync::Arc;

pub struct UseCases {
    pub check_url: Arc<CheckUrlUseCase>,
    pub registry_status: Arc<GetRegistryStatusUseCase>,
    pub refresh_registry: Arc<RefreshRegistryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, registry: &RegistryServices) -> Self {
        Self {
            check_url: Arc::new(CheckUrlUseCase::new(registry.holder.clone())),
            registry_status: Arc::new(GetRegistryStatusUseCase::new(registry.holder.clone())),
            refresh_registry: Arc::new(
                RefreshRegistryUseCase::new(registry.source.clone(), registry.holder.clone())
                    .with_attempt_timeout(config.registry.attempt_timeout()),
            ),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            check_url: self.check_url.clone(),
            registry_status: self.registry_status.clone(),
        }
    }
}

pub fn registry_update_job(config: &Config, use_cases: &UseCases) -> RegistryUpdateJob {
    RegistryUpdateJob::new(use_cases.refresh_registry.clone())
        .with_interval(config.registry.update_interval_secs)
        .with_backoff(Backoff::new(
            config.registry.initial_backoff(),
            config.registry.max_backoff(),
        ))
}
