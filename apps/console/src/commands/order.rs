//! # Order Commands
//!
//! Placing orders and managing the order history.
//!
//! ## Order Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order 3 2                                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place_order(product 3, qty 2)                                          │
//! │       │                                                                 │
//! │       ├── ok ──────► { order, product }   stock -2, sold +2             │
//! │       │                                                                 │
//! │       └── refused ─► INSUFFICIENT_STOCK   nothing changed               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use stockroom_core::report::{self, OrdersSummary};
use stockroom_core::{transaction, Order, OrderId, Product, ProductId};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{Inventory, InventoryState};

/// Order history plus its header numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub items: Vec<Order>,
    pub summary: OrdersSummary,
}

impl From<&Inventory> for OrdersResponse {
    fn from(inventory: &Inventory) -> Self {
        let orders = inventory.orders.orders();
        OrdersResponse {
            items: orders.to_vec(),
            summary: report::orders_summary(orders),
        }
    }
}

/// The created order and the product after the stock move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order: Order,
    pub product: Option<Product>,
}

/// Places an order against a product.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a non-positive quantity
/// - `INSUFFICIENT_STOCK` for an unknown product or not enough stock
/// - `VALIDATION_ERROR` when an earlier edit left `sold` too close to `i64::MAX`
pub fn place_order(
    state: &InventoryState,
    product_id: ProductId,
    quantity: i64,
) -> Result<PlaceOrderResponse, ApiError> {
    debug!(product_id = %product_id, quantity, "place_order command");

    state.with_inventory_mut(|inv| -> Result<PlaceOrderResponse, ApiError> {
        let order = transaction::place_order(
            &mut inv.products,
            &mut inv.orders,
            product_id,
            quantity,
            Utc::now(),
        )?;

        Ok(PlaceOrderResponse {
            order,
            product: inv.products.get(product_id).cloned(),
        })
    })
}

/// Gets the order history, oldest first.
pub fn get_orders(state: &InventoryState) -> OrdersResponse {
    debug!("get_orders command");
    state.with_inventory(|inv| OrdersResponse::from(inv))
}

/// Removes one order. Product counters are not restored.
pub fn delete_order(state: &InventoryState, id: OrderId) -> OrdersResponse {
    debug!(id = %id, "delete_order command");

    state.with_inventory_mut(|inv| {
        if inv.orders.delete(id).is_none() {
            warn!(id = %id, "Delete ignored, order not found");
        }
        OrdersResponse::from(&*inv)
    })
}

/// Removes every order. Product counters are not restored.
pub fn clear_orders(state: &InventoryState) -> OrdersResponse {
    debug!("clear_orders command");

    state.with_inventory_mut(|inv| {
        inv.orders.clear();
        OrdersResponse::from(&*inv)
    })
}
