pub mod store;
pub mod transition;

pub use crate::domain::model::{Product, StockInfo};
pub use crate::domain::ports::{ConfigProvider, Notifier, PersistentStore, StockCatalog};
pub use crate::utils::error::Result;
pub use store::{CartStore, DEFAULT_CART_KEY};
