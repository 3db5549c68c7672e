use crate::domain::model::{Product, StockInfo};
use crate::utils::error::{CatalogError, StorageError};
use async_trait::async_trait;

/// Read-only view of the remote catalog: product metadata and current stock
/// counts, by product id. Both lookups fail with `CatalogError::NotFound` when
/// the id is unknown; transport problems surface as `CatalogError::Transport`.
#[async_trait]
pub trait StockCatalog: Send + Sync {
    async fn stock(&self, product_id: u64) -> Result<StockInfo, CatalogError>;
    async fn product(&self, product_id: u64) -> Result<Product, CatalogError>;
}

/// Fire-and-forget user-facing message display (the toast stand-in).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Durable string key-value storage. Loaded once at store construction, saved
/// after every successful mutation.
pub trait PersistentStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn cart_key(&self) -> &str;
}

// Shared handles satisfy the ports too, so a caller can keep observing a
// collaborator after handing it to the store.

#[async_trait]
impl<C: StockCatalog + ?Sized> StockCatalog for std::sync::Arc<C> {
    async fn stock(&self, product_id: u64) -> Result<StockInfo, CatalogError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: u64) -> Result<Product, CatalogError> {
        (**self).product(product_id).await
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<P: PersistentStore + ?Sized> PersistentStore for std::sync::Arc<P> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
