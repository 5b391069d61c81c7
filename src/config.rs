//! Application configuration

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_with::serde_as;
use tracing::warn;

use crate::errors::FlightTrackerError;

pub const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
}

/// Connection settings for the upstream flight-data provider
#[serde_as]
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// API access key, sent as the `access_key` query parameter
    pub access_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with("config/default", "FLIGHTS")
    }

    /// Load from an optional config file, overridden by `<prefix>__*` variables
    pub fn load_with(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ProviderConfig {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), FlightTrackerError> {
        self.validate_access_key()?;
        self.validate_base_url()?;
        self.validate_timeout()?;
        Ok(())
    }

    /// Provider endpoint listing flights
    pub fn flights_url(&self) -> String {
        format!("{}/flights", self.base_url.trim_end_matches('/'))
    }

    fn validate_access_key(&self) -> Result<(), FlightTrackerError> {
        if self.access_key.trim().is_empty() {
            return Err(FlightTrackerError::ConfigurationError {
                message: "Access key cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    fn validate_base_url(&self) -> Result<(), FlightTrackerError> {
        if self.base_url.starts_with("http://") {
            warn!("Provider base URL is not using TLS: {}", self.base_url);
        } else if !self.base_url.starts_with("https://") {
            return Err(FlightTrackerError::ConfigurationError {
                message: format!("Base URL must be http(s): {}", self.base_url),
            });
        }
        Ok(())
    }

    fn validate_timeout(&self) -> Result<(), FlightTrackerError> {
        if self.timeout.is_zero() {
            return Err(FlightTrackerError::ConfigurationError {
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
