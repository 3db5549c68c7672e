use serde::{Deserialize, Serialize};

/// A cart line item. `amount` is the quantity in the cart, not a catalog
/// attribute; the catalog returns products with `amount` zeroed/absent and the
/// cart attaches its own count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub amount: u32,
}

/// Quantity the catalog currently has available for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub id: u64,
    pub amount: u32,
}

/// Serializes the cart for the persistent store: a JSON array of line items.
pub fn encode_cart(cart: &[Product]) -> serde_json::Result<String> {
    serde_json::to_string(cart)
}

/// Parses a persisted cart payload. Absent or unparseable payloads load as an
/// empty cart rather than an error; a corrupt store must not brick the UI.
pub fn decode_cart(payload: Option<&str>) -> Vec<Product> {
    match payload {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("discarding unparseable cart payload: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}
