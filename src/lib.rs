pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileStore, HttpCatalog, MemoryStore, RecordingNotifier, TracingNotifier};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use self::core::{CartStore, Product, StockInfo, DEFAULT_CART_KEY};
pub use utils::error::{CartError, CatalogError, Result, StorageError};
