//! Pure cart state transitions. Every validation rule lives here; the
//! functions never touch storage, the catalog, or the notifier, so the whole
//! decision surface is testable without I/O. `CartStore` supplies the catalog
//! data and commits the returned cart.

use crate::domain::model::{Product, StockInfo};
use crate::utils::error::{CartError, Result};

/// Adds one unit of `product` to the cart.
///
/// Rejected with `OutOfStock` when the catalog has at most one unit, or when
/// the quantity already in the cart would meet or exceed the available stock.
/// On success the existing entry is incremented in place (order preserved) or
/// a fresh entry with `amount = 1` is appended.
pub fn add(cart: &[Product], product: Product, stock: &StockInfo) -> Result<Vec<Product>> {
    if stock.amount <= 1 {
        return Err(CartError::OutOfStock);
    }

    let current_amount = cart
        .iter()
        .find(|item| item.id == product.id)
        .map(|item| item.amount)
        .unwrap_or(0);

    if current_amount >= stock.amount {
        return Err(CartError::OutOfStock);
    }

    let mut next: Vec<Product> = cart.to_vec();
    match next.iter_mut().find(|item| item.id == product.id) {
        Some(item) => item.amount += 1,
        None => next.push(Product { amount: 1, ..product }),
    }
    Ok(next)
}

/// Removes every entry with the given id. Rejected with `RemoveFailed` when
/// the id is not in the cart.
pub fn remove(cart: &[Product], product_id: u64) -> Result<Vec<Product>> {
    let next: Vec<Product> = cart
        .iter()
        .filter(|item| item.id != product_id)
        .cloned()
        .collect();

    if next.len() == cart.len() {
        return Err(CartError::RemoveFailed);
    }
    Ok(next)
}

/// Sets the quantity of an existing entry to `amount`.
///
/// The entry must already be in the cart (`UpdateFailed` otherwise). Target
/// amounts of 1 or less are rejected with `QuantityTooLow`; note this also
/// rejects setting the quantity to exactly 1, which matches the storefront's
/// long-standing behavior. The target must be strictly less than the
/// available stock (`OutOfStock` otherwise, including an empty catalog).
pub fn update_amount(
    cart: &[Product],
    product_id: u64,
    amount: u32,
    stock: &StockInfo,
) -> Result<Vec<Product>> {
    if !cart.iter().any(|item| item.id == product_id) {
        return Err(CartError::UpdateFailed);
    }

    if amount <= 1 {
        return Err(CartError::QuantityTooLow);
    }

    if stock.amount == 0 {
        return Err(CartError::OutOfStock);
    }
    if amount >= stock.amount {
        return Err(CartError::OutOfStock);
    }

    let next: Vec<Product> = cart
        .iter()
        .map(|item| {
            if item.id != product_id {
                item.clone()
            } else {
                Product {
                    amount,
                    ..item.clone()
                }
            }
        })
        .collect();
    Ok(next)
}
