use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::server::ServerConfig;

/// Main configuration structure for RKN Guard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote authority and refresh schedule
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rkn-guard.toml in current directory
    /// 3. /etc/rkn-guard/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("rkn-guard.toml").exists() {
            Self::from_file("rkn-guard.toml")?
        } else if std::path::Path::new("/etc/rkn-guard/config.toml").exists() {
            Self::from_file("/etc/rkn-guard/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.http_port {
            self.server.http_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(base_url) = overrides.base_url {
            self.registry.base_url = base_url;
        }
        if let Some(interval) = overrides.update_interval_secs {
            self.registry.update_interval_secs = interval;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }
        self.server.socket_addr()?;

        self.registry.validate()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub http_port: Option<u16>,
    pub bind_address: Option<String>,
    pub base_url: Option<String>,
    pub update_interval_secs: Option<u64>,
    pub log_level: Option<String>,
}
