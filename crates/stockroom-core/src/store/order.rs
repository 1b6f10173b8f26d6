//! # Order Store
//!
//! Append-only ledger of placed orders.
//!
//! Orders are never edited. They can be removed one at a time or all at once;
//! removing an order does not give stock back to its product.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::types::{NewOrder, Order, OrderId};
use crate::validation::{validate_order_quantity, ValidationResult};

/// The order ledger.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    items: Vec<Order>,
    /// Last id handed out. Survives `clear()`.
    last_id: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.items
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.items.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an order.
    ///
    /// The order gets the next id from the store's counter and, when the
    /// input carries no date, `now` formatted as RFC 3339.
    ///
    /// ## Errors
    /// `MustBePositive` when `quantity <= 0`.
    pub fn add(&mut self, new_order: NewOrder, now: DateTime<Utc>) -> ValidationResult<Order> {
        validate_order_quantity(new_order.quantity)?;

        self.last_id += 1;
        let date = new_order
            .date
            .filter(|date| !date.trim().is_empty())
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, true));

        let order = Order {
            id: OrderId::new(self.last_id),
            product_id: new_order.product_id,
            product_name: new_order.product_name,
            quantity: new_order.quantity,
            date,
        };

        debug!(
            id = %order.id,
            product = %order.product_name,
            quantity = order.quantity,
            "Order recorded"
        );
        self.items.push(order.clone());
        Ok(order)
    }

    /// Removes one order. Returns `None` for an unknown id.
    pub fn delete(&mut self, id: OrderId) -> Option<Order> {
        let index = self.items.iter().position(|o| o.id == id)?;
        let removed = self.items.remove(index);
        debug!(id = %id, "Order deleted");
        Some(removed)
    }

    /// Removes every order and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        info!(dropped, "Order history cleared");
        dropped
    }
}
