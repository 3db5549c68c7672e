use crate::core::{ConfigProvider, DEFAULT_CART_KEY};
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration, for storefront deployments that prefer a checked
/// in config over CLI flags.
///
/// ```toml
/// [catalog]
/// base_url = "http://localhost:3333"
///
/// [storage]
/// data_dir = "./data"
/// cart_key = "storefront:cart"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.catalog.base_url
    }

    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn cart_key(&self) -> &str {
        &self.storage.cart_key
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("catalog.base_url", &self.catalog.base_url)?;
        validate_path("storage.data_dir", &self.storage.data_dir)?;
        validate_non_empty_string("storage.cart_key", &self.storage.cart_key)?;
        Ok(())
    }
}
