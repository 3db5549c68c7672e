pub mod toml_config;

use crate::core::{ConfigProvider, DEFAULT_CART_KEY};
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "cart-store"),
    command(about = "A storefront shopping-cart state manager")
)]
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the catalog/stock API.
    #[cfg_attr(feature = "cli", arg(long, default_value = "http://localhost:3333"))]
    pub api_base_url: String,

    /// Directory holding the persisted cart.
    #[cfg_attr(feature = "cli", arg(long, default_value = "./data"))]
    pub data_dir: String,

    /// Storage key for the cart payload.
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_CART_KEY))]
    pub cart_key: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn cart_key(&self) -> &str {
        &self.cart_key
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("cart_key", &self.cart_key)?;
        Ok(())
    }
}
