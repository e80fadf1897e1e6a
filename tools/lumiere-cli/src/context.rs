//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use lumiere_commerce::catalog::CatalogStore;
use lumiere_commerce::{CheckoutPolicy, Storefront};
use lumiere_data::StorefrontClient;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// File names searched for, in order, from the working directory upwards.
const CONFIG_NAMES: [&str; 3] = ["lumiere.toml", ".lumiere.toml", "lumiere.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_source: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Resolve configuration: `--config`, else the nearest config file,
    /// else defaults. `--api-url` wins over all of them.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let (mut config, config_source) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match find_config(&cwd) {
                    Some(path) => {
                        let config = CliConfig::load(&path.to_string_lossy())?;
                        (config, Some(path))
                    }
                    None => (CliConfig::default(), None),
                }
            }
        };

        if let Some(url) = api_url {
            config.override_api_url(url)?;
        }

        debug!(base_url = %config.api.base_url, source = ?config_source, "configuration resolved");
        Ok(Self {
            config,
            config_source,
            output,
        })
    }

    /// HTTP client for the configured API.
    pub fn client(&self) -> Result<StorefrontClient> {
        StorefrontClient::from_config(&self.config.api).context("Failed to create HTTP client")
    }

    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            order_timeout: self.config.api.order_timeout(),
        }
    }

    /// Load the catalog from the API, or from the built-in fixture when
    /// `offline` is set.
    pub async fn storefront(&self, offline: bool) -> Result<Storefront> {
        if offline {
            return Ok(Storefront::with_catalog(CatalogStore::from_fixture(), self.policy()));
        }

        let client = self.client()?;
        let mut shop = Storefront::new(self.policy());
        shop.load_catalog(&client)
            .await
            .with_context(|| format!("Failed to load products from {}", self.config.api.base_url))?;
        Ok(shop)
    }
}

/// Find the nearest config file at or above `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumiere-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("lumiere.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join("lumiere.toml")));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = scratch_dir("nearest");
        let nested = root.join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("lumiere.toml"), "").unwrap();
        std::fs::write(nested.join(".lumiere.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join(".lumiere.toml")));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_explicit_config_and_override() {
        let root = scratch_dir("explicit");
        let path = root.join("custom.toml");
        std::fs::write(&path, "[api]\norder_timeout_secs = 12\n").unwrap();

        let ctx = Context::load(
            path.to_str(),
            Some("https://shop.example.com"),
            Output::new(false, true),
        )
        .unwrap();

        assert_eq!(ctx.config.api.base_url, "https://shop.example.com");
        assert_eq!(ctx.policy().order_timeout, std::time::Duration::from_secs(12));
        assert_eq!(ctx.config_source, Some(path));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_offline_storefront_uses_fixture() {
        let ctx = Context {
            config: CliConfig::default(),
            config_source: None,
            output: Output::new(false, true),
        };
        let shop = ctx.storefront(true).await.unwrap();
        assert_eq!(shop.catalog().len(), 9);
    }
}
