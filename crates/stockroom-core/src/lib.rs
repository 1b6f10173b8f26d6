//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It owns the product and order
//! collections, the order transaction that ties them together, and every
//! report derived from them. Nothing in here touches the disk, the network or
//! the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    products ──► place order ──► dashboard ──► reports           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │   store   │  │ transaction │  │  report  │  │   │
//! │  │   │  Product  │  │ Products  │  │ place_order │  │  totals  │  │   │
//! │  │   │  Order    │  │ Orders    │  │             │  │  series  │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              stockroom-catalog (Catalog Loaders)                │   │
//! │  │              JSON file, seeded demo catalog                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Product, Order, FetchStatus, ...)
//! - [`validation`] - Guard predicates and input validators
//! - [`error`] - Domain error types
//! - [`store`] - Product and order stores
//! - [`transaction`] - The order transaction
//! - [`report`] - Derived report views
//! - [`listing`] - Product list filtering for the products page
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use stockroom_core::store::{OrderStore, ProductStore};
//! use stockroom_core::{report, transaction, NewProduct};
//!
//! let mut products = ProductStore::new();
//! let mut orders = OrderStore::new();
//!
//! let hat = products
//!     .add(NewProduct::new("Hat", "Apparel").with_stock("10"))
//!     .unwrap();
//!
//! transaction::place_order(&mut products, &mut orders, hat.id, 3, Utc::now()).unwrap();
//!
//! let totals = report::totals(products.products(), orders.orders());
//! assert_eq!(totals.total_sold, 3);
//! assert_eq!(totals.total_stock, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod listing;
pub mod report;
pub mod store;
pub mod transaction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// How many products the reports page lists as top sellers.
pub const TOP_SELLERS_LIMIT: usize = 5;

/// Length of the "this week" window, in days.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Maximum length of a product search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
