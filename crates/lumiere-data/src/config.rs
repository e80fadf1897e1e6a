//! API connection settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ORDER_TIMEOUT_SECS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_order_timeout_secs() -> u64 {
    DEFAULT_ORDER_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("lumiere/{}", env!("CARGO_PKG_VERSION"))
}

/// Where the storefront API lives and how long to wait for it.
///
/// ```toml
/// base_url = "https://shop.example.com"
/// timeout_secs = 10
/// order_timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on catalog requests.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bound on order submission.
    #[serde(default = "default_order_timeout_secs")]
    pub order_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            order_timeout_secs: default_order_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn order_timeout(&self) -> Duration {
        Duration::from_secs(self.order_timeout_secs)
    }

    /// Check values that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.order_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "order_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
