use crate::core::transition;
use crate::domain::model::{decode_cart, encode_cart, Product};
use crate::domain::ports::{Notifier, PersistentStore, StockCatalog};
use crate::utils::error::{CartError, CatalogError, Result};
use std::sync::RwLock;
use tokio::sync::Mutex;

/// Storage key for the persisted cart payload when none is configured.
pub const DEFAULT_CART_KEY: &str = "storefront:cart";

/// The cart state manager. Owns the cart exclusively; collaborators only
/// supply lookup data (catalog), observe messages (notifier), or hold the
/// persisted payload (store).
///
/// Mutations never surface errors to the caller: each failure becomes exactly
/// one `notify` call and the cart keeps its prior state. Callers observe
/// outcomes through `cart()` snapshots and the notifier.
pub struct CartStore<C, N, P> {
    catalog: C,
    notifier: N,
    store: P,
    key: String,
    cart: RwLock<Vec<Product>>,
    // One in-flight mutation at a time; later calls queue in lock order.
    mutation: Mutex<()>,
}

impl<C, N, P> CartStore<C, N, P>
where
    C: StockCatalog,
    N: Notifier,
    P: PersistentStore,
{
    /// Builds the store, loading the initial cart from the persistent store.
    /// A missing, unreadable, or unparseable payload loads as an empty cart.
    pub fn new(catalog: C, notifier: N, store: P, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = match store.load(&key) {
            Ok(payload) => decode_cart(payload.as_deref()),
            Err(e) => {
                tracing::warn!("failed to load persisted cart under {:?}: {}", key, e);
                Vec::new()
            }
        };
        tracing::debug!("loaded cart with {} line item(s)", initial.len());

        Self {
            catalog,
            notifier,
            store,
            key,
            cart: RwLock::new(initial),
            mutation: Mutex::new(()),
        }
    }

    /// Read-only snapshot of the current cart.
    pub fn cart(&self) -> Vec<Product> {
        self.cart
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Adds one unit of the product to the cart, validating against current
    /// stock first.
    pub async fn add_product(&self, product_id: u64) {
        let _guard = self.mutation.lock().await;
        if let Err(err) = self.try_add(product_id).await {
            self.reject(err);
        }
    }

    /// Removes the product from the cart entirely.
    pub async fn remove_product(&self, product_id: u64) {
        let _guard = self.mutation.lock().await;
        match transition::remove(&self.cart(), product_id) {
            Ok(next) => self.commit(next),
            Err(err) => self.reject(err),
        }
    }

    /// Sets the cart quantity of an already-carted product, validating the
    /// target against current stock.
    pub async fn update_product_amount(&self, product_id: u64, amount: u32) {
        let _guard = self.mutation.lock().await;
        if let Err(err) = self.try_update(product_id, amount).await {
            self.reject(err);
        }
    }

    async fn try_add(&self, product_id: u64) -> Result<()> {
        // The stock lookup runs first; a product unknown at this stage is an
        // add failure. Once stock resolved, a missing product record means
        // the catalog pulled it mid-flight, which the storefront reports as
        // stock exhaustion.
        let stock = self
            .catalog
            .stock(product_id)
            .await
            .map_err(|e| classify(e, CartError::ProductAddFailed))?;

        let product = self
            .catalog
            .product(product_id)
            .await
            .map_err(|e| classify(e, CartError::OutOfStock))?;

        let next = transition::add(&self.cart(), product, &stock)?;
        self.commit(next);
        Ok(())
    }

    async fn try_update(&self, product_id: u64, amount: u32) -> Result<()> {
        let stock = self
            .catalog
            .stock(product_id)
            .await
            .map_err(|e| classify(e, CartError::UpdateFailed))?;

        let next = transition::update_amount(&self.cart(), product_id, amount, &stock)?;
        self.commit(next);
        Ok(())
    }

    /// Persists and publishes a validated cart. Persistence is best-effort:
    /// a failed save is logged and the in-memory state still advances.
    fn commit(&self, next: Vec<Product>) {
        match encode_cart(&next) {
            Ok(payload) => {
                if let Err(e) = self.store.save(&self.key, &payload) {
                    tracing::warn!("failed to persist cart under {:?}: {}", self.key, e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart: {}", e),
        }

        tracing::info!("cart updated, {} line item(s)", next.len());
        *self
            .cart
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
    }

    fn reject(&self, err: CartError) {
        tracing::debug!("mutation rejected: {}", err);
        self.notifier.notify(&err.to_string());
    }
}

/// Maps a catalog failure into a cart error: `NotFound` becomes the
/// stage-specific error, anything else is surfaced verbatim.
fn classify(err: CatalogError, on_not_found: CartError) -> CartError {
    match err {
        CatalogError::NotFound => on_not_found,
        other => CartError::Unexpected(other.to_string()),
    }
}
