use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;

pub const MIN_UPDATE_INTERVAL_SECS: u64 = 60 * 60;
pub const MAX_UPDATE_INTERVAL_SECS: u64 = 48 * 60 * 60;
pub const MAX_BACKOFF_SECS: u64 = 48 * 60 * 60;

/// Remote authority and refresh schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between scheduled refreshes, within [1h, 48h].
    #[serde(default = "default_update_interval_secs")]
    pub update_interval_secs: u64,

    #[serde(default = "default_initial_backoff_secs")]
    pub initial_backoff_secs: u64,

    #[serde(default = "default_max_backoff_secs")]
    pub max_backoff_secs: u64,

    /// Hard bound on one fetch-and-build cycle.
    #[serde(default = "default_attempt_timeout_secs")]
    pub attempt_timeout_secs: u64,

    /// HTTP client timeout for the upstream request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            update_interval_secs: default_update_interval_secs(),
            initial_backoff_secs: default_initial_backoff_secs(),
            max_backoff_secs: default_max_backoff_secs(),
            attempt_timeout_secs: default_attempt_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl RegistryConfig {
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_secs(self.initial_backoff_secs)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_secs(self.max_backoff_secs)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Validation(
                "registry.base_url must not be empty".to_string(),
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "registry.base_url must be an http(s) URL, got {}",
                base_url
            )));
        }

        if self.update_interval_secs < MIN_UPDATE_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "registry.update_interval_secs too small ({}), must be >= {}",
                self.update_interval_secs, MIN_UPDATE_INTERVAL_SECS
            )));
        }
        if self.update_interval_secs > MAX_UPDATE_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "registry.update_interval_secs too large ({}), must be <= {}",
                self.update_interval_secs, MAX_UPDATE_INTERVAL_SECS
            )));
        }

        if self.initial_backoff_secs == 0 {
            return Err(ConfigError::Validation(
                "registry.initial_backoff_secs must be positive".to_string(),
            ));
        }
        if self.max_backoff_secs < self.initial_backoff_secs {
            return Err(ConfigError::Validation(format!(
                "registry.max_backoff_secs ({}) must be >= initial_backoff_secs ({})",
                self.max_backoff_secs, self.initial_backoff_secs
            )));
        }
        if self.max_backoff_secs > MAX_BACKOFF_SECS {
            return Err(ConfigError::Validation(format!(
                "registry.max_backoff_secs too large ({}), must be <= {}",
                self.max_backoff_secs, MAX_BACKOFF_SECS
            )));
        }

        if self.attempt_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "registry timeouts must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://reestr.rublacklist.net/api/v3".to_string()
}

fn default_update_interval_secs() -> u64 {
    6 * 60 * 60
}

fn default_initial_backoff_secs() -> u64 {
    30
}

fn default_max_backoff_secs() -> u64 {
    30 * 60
}

fn default_attempt_timeout_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    60
}
