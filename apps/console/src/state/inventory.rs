//! # Inventory State
//!
//! The product store and the order store, shared by every command.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State Operations                           │
//! │                                                                         │
//! │  Console Line           Command                  State Change           │
//! │  ────────────           ───────                  ────────────           │
//! │                                                                         │
//! │  add Hat Apparel 10 ──► add_product() ─────────► products.add()        │
//! │                                                                         │
//! │  order 1 3 ──────────► place_order() ──────────► products + orders     │
//! │                                                                         │
//! │  clear-orders ───────► clear_orders() ─────────► orders.clear()        │
//! │                                                                         │
//! │  reports ────────────► get_reports() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Every command holds the lock for its whole synchronous body.     │
//! │        The lock is never held across an `.await`.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::store::{OrderStore, ProductStore};

/// Both stores, mutated together by the order transaction.
#[derive(Debug, Default)]
pub struct Inventory {
    pub products: ProductStore,
    pub orders: OrderStore,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared inventory state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Inventory>>`:
/// - `Arc`: the console loop and a catalog load share the same inventory
/// - `Mutex`: one command mutates the stores at a time
///
/// A panic inside a command poisons the mutex. The stores are only ever
/// changed by methods that finish their writes before returning, so the data
/// behind a poisoned lock is still consistent and is used as is.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    inventory: Arc<Mutex<Inventory>>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_inventory(|inv| inv.products.len());
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&inventory)
    }

    /// Executes a function with write access to the inventory.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_inventory_mut(|inv| inv.orders.clear());
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::NewProduct;

    #[test]
    fn test_clones_share_inventory() {
        let state = InventoryState::new();
        let other = state.clone();

        state.with_inventory_mut(|inv| inv.products.add(NewProduct::new("Hat", "Apparel")).unwrap());

        assert_eq!(other.with_inventory(|inv| inv.products.len()), 1);
    }

    #[test]
    fn test_poisoned_lock_still_usable() {
        let state = InventoryState::new();
        let poisoner = state.clone();

        let result = std::thread::spawn(move || {
            poisoner.with_inventory_mut(|_| panic!("command panicked"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(state.with_inventory(|inv| inv.orders.len()), 0);
    }
}
