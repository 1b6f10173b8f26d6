//! # Product Store
//!
//! Holds the product collection and the catalog fetch lifecycle.
//!
//! ## Catalog Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Load (driven externally)                     │
//! │                                                                         │
//! │  1. begin_load()          Idle/Succeeded/Failed → Loading              │
//! │     (no-op while already Loading)                                      │
//! │                                                                         │
//! │  2. caller awaits the catalog loader (outside this crate)              │
//! │     readers keep seeing the previous collection                        │
//! │                                                                         │
//! │  3a. complete_load(records)   Loading → Succeeded, collection replaced │
//! │  3b. fail_load(message)       Loading → Failed, collection untouched   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! Ids come from a high-water mark: a new product gets one more than the
//! largest id this store has ever held, so a deleted product's id is never
//! handed out again.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::types::{CatalogRecord, FetchStatus, NewProduct, Product, ProductEdit, ProductId};
use crate::validation::{
    coerce_initial_count, validate_category, validate_product_name, ValidationResult,
};

/// The product collection plus its fetch status.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    items: Vec<Product>,
    status: FetchStatus,
    error: Option<String>,
    /// Largest id ever held by this store.
    high_water: u64,
}

impl ProductStore {
    /// Creates an empty store in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// Current snapshot of the collection, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Message of the most recent failed load, until a load succeeds.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // Fetch Lifecycle
    // =========================================================================

    /// Marks a catalog load as started.
    ///
    /// Returns `false` without changing anything when a load is already in
    /// flight; the caller must not start another one.
    pub fn begin_load(&mut self) -> bool {
        if self.status.is_loading() {
            debug!("Catalog load already in flight");
            return false;
        }

        info!(from = %self.status, "Catalog load started");
        self.status = FetchStatus::Loading;
        true
    }

    /// Replaces the collection with a fetched catalog.
    ///
    /// ## Id Fallback
    /// ```text
    /// records: [{id: 4}, {no id}, {id: 4}, {no id}]
    ///            │        │        │        │
    ///            ▼        ▼        ▼        ▼
    /// ids:       4        2        3        4 taken → 5
    ///          explicit  index+1  duplicate index+1 collides
    ///                             → index+1        → next free above max
    /// ```
    ///
    /// A repeated explicit id counts as missing. A missing id takes
    /// `index + 1`, or the next free id above the highest explicit id when
    /// `index + 1` is already taken.
    ///
    /// Returns `false` (and ignores the records) unless a load is in flight.
    pub fn complete_load(&mut self, records: Vec<CatalogRecord>) -> bool {
        if !self.status.is_loading() {
            warn!(status = %self.status, "Ignoring catalog result with no load in flight");
            return false;
        }

        let mut taken: HashSet<u64> = HashSet::with_capacity(records.len());
        let claimed: Vec<Option<u64>> = records
            .iter()
            .map(|record| {
                let id = record.explicit_id()?.value();
                if taken.insert(id) {
                    Some(id)
                } else {
                    warn!(id, name = %record.name, "Duplicate catalog id, reassigning");
                    None
                }
            })
            .collect();

        let mut next_free = taken.iter().copied().max().unwrap_or(0) + 1;
        let mut items = Vec::with_capacity(records.len());

        for (index, (record, claimed)) in records.into_iter().zip(claimed).enumerate() {
            let id = match claimed {
                Some(id) => id,
                None => {
                    let fallback = index as u64 + 1;
                    let id = if taken.contains(&fallback) {
                        while taken.contains(&next_free) {
                            next_free += 1;
                        }
                        next_free
                    } else {
                        fallback
                    };
                    taken.insert(id);
                    id
                }
            };

            items.push(Product {
                id: ProductId::new(id),
                name: record.name,
                category: record.category,
                stock: coerce_initial_count(record.stock.as_ref()),
                sold: coerce_initial_count(record.sold.as_ref()),
            });
        }

        let batch_max = items.iter().map(|p| p.id.value()).max().unwrap_or(0);
        self.high_water = self.high_water.max(batch_max);
        self.items = items;
        self.status = FetchStatus::Succeeded;
        self.error = None;

        info!(count = self.items.len(), "Catalog load complete");
        true
    }

    /// Records a failed catalog load. The collection is left as it was.
    ///
    /// Returns `false` (and ignores the failure) unless a load is in flight.
    pub fn fail_load(&mut self, message: impl Into<String>) -> bool {
        if !self.status.is_loading() {
            warn!(status = %self.status, "Ignoring catalog failure with no load in flight");
            return false;
        }

        let message = message.into();
        warn!(error = %message, kept = self.items.len(), "Catalog load failed");
        self.status = FetchStatus::Failed;
        self.error = Some(message);
        true
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Adds a product by hand.
    ///
    /// ## Rules
    /// - `name` and `category` must not be blank
    /// - `stock` / `sold` are coerced from raw input, defaulting to 0
    /// - The id is one past the store's high-water mark
    pub fn add(&mut self, new_product: NewProduct) -> ValidationResult<Product> {
        validate_product_name(&new_product.name)?;
        validate_category(&new_product.category)?;

        self.high_water += 1;
        let product = Product {
            id: ProductId::new(self.high_water),
            name: new_product.name.trim().to_string(),
            category: new_product.category.trim().to_string(),
            stock: coerce_initial_count(new_product.stock.as_ref()),
            sold: coerce_initial_count(new_product.sold.as_ref()),
        };

        debug!(id = %product.id, name = %product.name, stock = product.stock, "Product added");
        self.items.push(product.clone());
        Ok(product)
    }

    /// Overwrites `stock` and `sold` on the matching product.
    ///
    /// This is the trusted override path: values are not checked against
    /// order history and may be negative. Returns `false` for an unknown id.
    pub fn edit(&mut self, id: ProductId, edit: ProductEdit) -> bool {
        match self.items.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                debug!(
                    id = %id,
                    stock = edit.stock,
                    sold = edit.sold,
                    previous_stock = product.stock,
                    previous_sold = product.sold,
                    "Product edited"
                );
                product.stock = edit.stock;
                product.sold = edit.sold;
                true
            }
            None => false,
        }
    }

    /// Removes the matching product. Orders referencing it are not touched.
    pub fn delete(&mut self, id: ProductId) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        let removed = self.items.remove(index);
        debug!(id = %id, name = %removed.name, "Product deleted");
        Some(removed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawCount;

    fn record(id: Option<i64>, name: &str) -> CatalogRecord {
        CatalogRecord {
            id: id.map(RawCount::from),
            name: name.to_string(),
            category: "General".to_string(),
            stock: Some(RawCount::from(10)),
            sold: Some(RawCount::from(1)),
        }
    }

    fn ids(store: &ProductStore) -> Vec<u64> {
        store.products().iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_add_coerces_counts() {
        let mut store = ProductStore::new();
        let hat = store
            .add(NewProduct::new("Hat", "Apparel").with_stock("10").with_sold(""))
            .unwrap();

        assert_eq!(hat.stock, 10);
        assert_eq!(hat.sold, 0);
        assert_eq!(store.get(hat.id), Some(&hat));
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut store = ProductStore::new();
        assert!(store.add(NewProduct::new("", "Apparel")).is_err());
        assert!(store.add(NewProduct::new("Hat", "  ")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_assigns_unique_ids_after_delete() {
        let mut store = ProductStore::new();
        let a = store.add(NewProduct::new("A", "X")).unwrap();
        let b = store.add(NewProduct::new("B", "X")).unwrap();
        store.delete(b.id);
        let c = store.add(NewProduct::new("C", "X")).unwrap();

        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);
        assert_eq!(c.id.value(), 3);
    }

    #[test]
    fn test_edit_allows_negative_override() {
        let mut store = ProductStore::new();
        let hat = store.add(NewProduct::new("Hat", "Apparel").with_stock(3)).unwrap();

        assert!(store.edit(hat.id, ProductEdit { stock: -2, sold: 40 }));
        let edited = store.get(hat.id).unwrap();
        assert_eq!((edited.stock, edited.sold), (-2, 40));

        assert!(!store.edit(ProductId::new(99), ProductEdit { stock: 1, sold: 1 }));
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = ProductStore::new();
        store.add(NewProduct::new("Hat", "Apparel")).unwrap();
        assert!(store.delete(ProductId::new(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_lifecycle_success() {
        let mut store = ProductStore::new();
        assert_eq!(store.status(), FetchStatus::Idle);

        assert!(store.begin_load());
        assert_eq!(store.status(), FetchStatus::Loading);
        assert!(!store.begin_load(), "second begin while loading is a no-op");

        assert!(store.complete_load(vec![record(None, "A"), record(None, "B")]));
        assert_eq!(store.status(), FetchStatus::Succeeded);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_load_failure_keeps_previous_items() {
        let mut store = ProductStore::new();
        store.add(NewProduct::new("Kept", "X")).unwrap();

        assert!(store.begin_load());
        assert!(store.fail_load("HTTP 503"));
        assert_eq!(store.status(), FetchStatus::Failed);
        assert_eq!(store.error(), Some("HTTP 503"));
        assert_eq!(store.len(), 1);

        // Retry is permitted after a failure.
        assert!(store.begin_load());
        assert!(store.complete_load(vec![record(Some(5), "Fresh")]));
        assert_eq!(store.error(), None);
        assert_eq!(ids(&store), vec![5]);
    }

    #[test]
    fn test_results_without_load_are_ignored() {
        let mut store = ProductStore::new();
        assert!(!store.complete_load(vec![record(None, "A")]));
        assert!(!store.fail_load("late"));
        assert_eq!(store.status(), FetchStatus::Idle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_resolves_id_collisions() {
        let mut store = ProductStore::new();
        store.begin_load();
        store.complete_load(vec![
            record(Some(4), "explicit"),
            record(None, "fallback"),
            record(Some(4), "duplicate"),
            record(None, "colliding fallback"),
        ]);

        assert_eq!(ids(&store), vec![4, 2, 3, 5]);
    }

    #[test]
    fn test_add_after_load_continues_past_catalog_ids() {
        let mut store = ProductStore::new();
        store.begin_load();
        store.complete_load(vec![record(Some(10), "A"), record(Some(3), "B")]);

        let added = store.add(NewProduct::new("C", "X")).unwrap();
        assert_eq!(added.id.value(), 11);
    }
}
