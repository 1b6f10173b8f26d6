//! # Order Transaction
//!
//! Places an order against a product, touching both stores atomically.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order(product_id, quantity, now)               │
//! │                                                                         │
//! │  1. quantity > 0 ?            no ──► ValidationError::MustBePositive    │
//! │           │                                                             │
//! │  2. product exists and                                                  │
//! │     quantity <= stock ?       no ──► InsufficientStockOrInvalidProduct  │
//! │           │                                                             │
//! │  3. new counts fit in i64 ?   no ──► CountOverflow                      │
//! │           │                                                             │
//! │  4. OrderStore::add           { product_id, name copy, quantity, now } │
//! │           │                                                             │
//! │  5. ProductStore::edit        stock - quantity, sold + quantity         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │       Ok(order)                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All checks run before any write. Both stores are borrowed mutably for the
//! whole call, so no reader can observe the order without the stock change.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::store::{OrderStore, ProductStore};
use crate::types::{NewOrder, Order, ProductEdit, ProductId};
use crate::validation::validate_order_quantity;

/// Places an order and moves `quantity` units from stock to sold.
///
/// ## Errors
/// - [`CoreError::Validation`] for a non-positive quantity
/// - [`CoreError::InsufficientStockOrInvalidProduct`] for an unknown product
///   or a quantity larger than the current stock
/// - [`CoreError::CountOverflow`] when the new `sold` would not fit in `i64`
///
/// Neither store is modified when an error is returned.
pub fn place_order(
    products: &mut ProductStore,
    orders: &mut OrderStore,
    product_id: ProductId,
    quantity: i64,
    now: DateTime<Utc>,
) -> CoreResult<Order> {
    validate_order_quantity(quantity)?;

    let product = match products.get(product_id) {
        Some(product) if product.can_fulfil(quantity) => product.clone(),
        found => {
            let available = found.map(|p| p.stock);
            warn!(
                product_id = %product_id,
                requested = quantity,
                ?available,
                "Order refused"
            );
            return Err(CoreError::InsufficientStockOrInvalidProduct {
                product_id,
                requested: quantity,
                available,
            });
        }
    };

    let counts = product
        .stock
        .checked_sub(quantity)
        .zip(product.sold.checked_add(quantity));
    let Some((stock, sold)) = counts else {
        warn!(
            product_id = %product_id,
            requested = quantity,
            sold = product.sold,
            "Order refused, counts out of range"
        );
        return Err(CoreError::CountOverflow {
            product_id,
            requested: quantity,
        });
    };

    let order = orders.add(
        NewOrder {
            product_id: Some(product.id),
            product_name: product.name.clone(),
            quantity,
            date: None,
        },
        now,
    )?;

    let updated = products.edit(product.id, ProductEdit { stock, sold });
    debug_assert!(updated, "product vanished while both stores were borrowed");

    info!(
        order_id = %order.id,
        product_id = %product.id,
        quantity,
        stock_left = stock,
        "Order placed"
    );

    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================
