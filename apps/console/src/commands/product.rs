//! # Product Commands
//!
//! Product list, filters and manual product maintenance.
//!
//! ## Absorbed Failures
//! ```text
//! add_product("", "Apparel")  ──► warn! + unchanged ProductsResponse
//! edit_product(99, ...)       ──► warn! + unchanged ProductsResponse
//! delete_product(99)          ──► warn! + unchanged ProductsResponse
//! ```
//! These mirror a form that silently ignores bad input: the caller always
//! gets the current product list back.

use serde::{Deserialize, Serialize};
use stockroom_core::listing::{self, ListingQuery};
use stockroom_core::validation::{coerce_edit_count, validate_search_query};
use stockroom_core::{FetchStatus, NewProduct, Product, ProductEdit, ProductId, RawCount};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{Inventory, InventoryState};

/// Product list plus the catalog fetch status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub items: Vec<Product>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl From<&Inventory> for ProductsResponse {
    fn from(inventory: &Inventory) -> Self {
        ProductsResponse {
            items: inventory.products.products().to_vec(),
            status: inventory.products.status(),
            error: inventory.products.error().map(str::to_string),
        }
    }
}

/// Gets every product in collection order.
pub fn get_products(state: &InventoryState) -> ProductsResponse {
    debug!("get_products command");
    state.with_inventory(|inv| ProductsResponse::from(inv))
}

/// Gets the product table after category filter, sort and name search.
///
/// ## Errors
/// `VALIDATION_ERROR` when the search text is too long.
pub fn list_products(state: &InventoryState, mut query: ListingQuery) -> Result<Vec<Product>, ApiError> {
    debug!(?query, "list_products command");

    if let Some(search) = query.search.take() {
        let search = validate_search_query(&search).map_err(|e| ApiError::validation(e.to_string()))?;
        query.search = Some(search);
    }

    Ok(state.with_inventory(|inv| listing::list_products(inv.products.products(), &query)))
}

/// Gets `"All"` followed by every category in first-seen order.
pub fn get_categories(state: &InventoryState) -> Vec<String> {
    debug!("get_categories command");
    state.with_inventory(|inv| listing::categories(inv.products.products()))
}

/// Adds a product by hand.
pub fn add_product(state: &InventoryState, input: NewProduct) -> ProductsResponse {
    debug!(name = %input.name, category = %input.category, "add_product command");

    state.with_inventory_mut(|inv| {
        if let Err(e) = inv.products.add(input) {
            warn!(error = %e, "Product not added");
        }
        ProductsResponse::from(&*inv)
    })
}

/// Overwrites a product's stock and sold counters.
///
/// Both values are coerced from raw input; anything unreadable becomes 0.
pub fn edit_product(
    state: &InventoryState,
    id: ProductId,
    stock: RawCount,
    sold: RawCount,
) -> ProductsResponse {
    let edit = ProductEdit {
        stock: coerce_edit_count(Some(&stock)),
        sold: coerce_edit_count(Some(&sold)),
    };
    debug!(id = %id, stock = edit.stock, sold = edit.sold, "edit_product command");

    state.with_inventory_mut(|inv| {
        if !inv.products.edit(id, edit) {
            warn!(id = %id, "Edit ignored, product not found");
        }
        ProductsResponse::from(&*inv)
    })
}

/// Removes a product. Its orders stay in the history.
pub fn delete_product(state: &InventoryState, id: ProductId) -> ProductsResponse {
    debug!(id = %id, "delete_product command");

    state.with_inventory_mut(|inv| {
        if inv.products.delete(id).is_none() {
            warn!(id = %id, "Delete ignored, product not found");
        }
        ProductsResponse::from(&*inv)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::listing::SortField;

    fn state_with(products: &[(&str, &str, i64, i64)]) -> InventoryState {
        let state = InventoryState::new();
        for (name, category, stock, sold) in products {
            add_product(
                &state,
                NewProduct::new(*name, *category).with_stock(*stock).with_sold(*sold),
            );
        }
        state
    }

    #[test]
    fn test_add_product_returns_new_list() {
        let state = InventoryState::new();
        let response = add_product(&state, NewProduct::new("Hat", "Apparel").with_stock("10"));

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].stock, 10);
        assert_eq!(response.status, FetchStatus::Idle);
    }

    #[test]
    fn test_add_product_with_blank_name_is_noop() {
        let state = state_with(&[("Hat", "Apparel", 1, 0)]);
        let response = add_product(&state, NewProduct::new("  ", "Apparel"));
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_edit_product_coerces_raw_values() {
        let state = state_with(&[("Hat", "Apparel", 1, 0)]);
        let id = get_products(&state).items[0].id;

        let response = edit_product(&state, id, RawCount::from("12"), RawCount::from("oops"));
        assert_eq!((response.items[0].stock, response.items[0].sold), (12, 0));
    }

    #[test]
    fn test_edit_and_delete_unknown_are_noops() {
        let state = state_with(&[("Hat", "Apparel", 1, 0)]);
        let before = get_products(&state).items;

        let after_edit = edit_product(&state, ProductId::new(99), RawCount::from(5), RawCount::from(5));
        let after_delete = delete_product(&state, ProductId::new(99));

        assert_eq!(after_edit.items, before);
        assert_eq!(after_delete.items, before);
    }

    #[test]
    fn test_list_and_categories() {
        let state = state_with(&[
            ("Desk Lamp", "Home", 12, 3),
            ("Mug", "Kitchen", 40, 20),
            ("Floor Lamp", "Home", 2, 9),
        ]);

        assert_eq!(get_categories(&state), vec!["All", "Home", "Kitchen"]);

        let listed = list_products(
            &state,
            ListingQuery {
                category: Some("Home".to_string()),
                search: Some("  lamp ".to_string()),
                sort: Some(SortField::Stock),
            },
        )
        .unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Desk Lamp", "Floor Lamp"]);
    }

    #[test]
    fn test_list_rejects_long_search() {
        let state = InventoryState::new();
        let query = ListingQuery {
            search: Some("x".repeat(500)),
            ..Default::default()
        };
        assert!(list_products(&state, query).is_err());
    }
}
