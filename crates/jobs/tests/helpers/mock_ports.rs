#![allow(dead_code)]

use async_trait::async_trait;
use rkn_guard_application::ports::{RegistryHolderPort, RegistrySource};
use rkn_guard_domain::{DomainError, Registry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub struct MockRegistrySource {
    domains: RwLock<Vec<String>>,
    should_fail: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
    call_count: AtomicU64,
}

impl MockRegistrySource {
    pub fn new() -> Self {
        Self::with_domains(Vec::<String>::new())
    }

    pub fn with_domains<S: Into<String>>(domains: Vec<S>) -> Self {
        Self {
            domains: RwLock::new(domains.into_iter().map(Into::into).collect()),
            should_fail: RwLock::new(false),
            delay: RwLock::new(None),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RegistrySource for MockRegistrySource {
    async fn fetch_raw_domains(&self) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::RegistryFetch("mock failure".to_string()));
        }
        Ok(self.domains.read().unwrap().clone())
    }
}

/// Lock-based holder, enough for use case tests.
pub struct InMemoryHolder {
    current: RwLock<Arc<Registry>>,
    set_count: AtomicU64,
}

impl InMemoryHolder {
    pub fn new() -> Self {
        Self::with_registry(Registry::empty())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
            set_count: AtomicU64::new(0),
        }
    }

    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::Relaxed)
    }
}

impl RegistryHolderPort for InMemoryHolder {
    fn get(&self) -> Arc<Registry> {
        self.current.read().unwrap().clone()
    }

    fn set(&self, registry: Registry) {
        *self.current.write().unwrap() = Arc::new(registry);
        self.set_count.fetch_add(1, Ordering::Relaxed);
    }
}
