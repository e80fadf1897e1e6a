//! CLI configuration.

use anyhow::{Context, Result};
use lumiere_data::ApiConfig;
use serde::{Deserialize, Serialize};

/// Default threshold under which a product is flagged as low stock.
pub const DEFAULT_LOW_STOCK: u32 = 2;

fn default_low_stock() -> u32 {
    DEFAULT_LOW_STOCK
}

/// CLI configuration file.
///
/// ```toml
/// [api]
/// base_url = "https://shop.example.com"
/// order_timeout_secs = 20
///
/// [display]
/// low_stock_threshold = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Terminal presentation.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Products with this many units left or fewer are flagged.
    #[serde(default = "default_low_stock")]
    pub low_stock_threshold: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK,
        }
    }
}

impl CliConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .api
            .validate()
            .with_context(|| format!("Invalid config file: {}", path))?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Point the API at a different base URL.
    pub fn override_api_url(&mut self, url: &str) -> Result<()> {
        self.api.base_url = url.to_string();
        self.api.validate().context("Invalid --api-url")?;
        Ok(())
    }
}
