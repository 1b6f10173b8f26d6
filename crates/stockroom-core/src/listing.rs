//! # Product Listing
//!
//! Category list and the filtered, sorted, searched product table.
//!
//! ```text
//! products ──► category filter ──► sort (stock | sold, desc) ──► name search
//!              "All" = no filter    stable                     case-insensitive
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Pseudo-category that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Column the product table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Stock,
    Sold,
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" => Ok(SortField::Stock),
            "sold" => Ok(SortField::Sold),
            other => Err(format!("Unknown sort field: {other}")),
        }
    }
}

/// Filters for [`list_products`]. The default lists everything as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Category to keep; `None` or `"All"` keeps every category.
    #[serde(default)]
    pub category: Option<String>,
    /// Substring matched against product names, ignoring case.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<SortField>,
}

/// `"All"` followed by every distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            products
                .iter()
                .filter(|p| seen.insert(p.category.as_str()))
                .map(|p| p.category.clone()),
        )
        .collect()
}

/// Applies the category filter, then the sort, then the name search.
pub fn list_products(products: &[Product], query: &ListingQuery) -> Vec<Product> {
    let mut listed: Vec<Product> = match query.category.as_deref() {
        None | Some(ALL_CATEGORIES) => products.to_vec(),
        Some(category) => products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    };

    match query.sort {
        Some(SortField::Stock) => listed.sort_by(|a, b| b.stock.cmp(&a.stock)),
        Some(SortField::Sold) => listed.sort_by(|a, b| b.sold.cmp(&a.sold)),
        None => {}
    }

    if let Some(needle) = query.search.as_deref().map(str::to_lowercase) {
        if !needle.is_empty() {
            listed.retain(|p| p.name.to_lowercase().contains(&needle));
        }
    }

    listed
}
