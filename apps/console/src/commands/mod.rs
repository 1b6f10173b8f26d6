//! # Commands Module
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product list, filters, add/edit/delete
//! ├── order.rs    ◄─── Place order, order history
//! ├── catalog.rs  ◄─── Catalog load and status
//! └── report.rs   ◄─── Dashboard and reports views
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Flow                                 │
//! │                                                                         │
//! │  stdin: order 3 2                                                       │
//! │         │                                                               │
//! │         │ (repl::parse_command)                                         │
//! │         ▼                                                               │
//! │  fn place_order(                                                        │
//! │      state: &InventoryState,  ◄── Shared inventory                      │
//! │      product_id: ProductId,   ◄── From the typed line                   │
//! │      quantity: i64,                                                     │
//! │  ) -> Result<PlaceOrderResponse, ApiError>                              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: { "order": {...}, "product": {...} }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs: the inventory always, the
//! configuration for reports, a catalog loader for loads.

pub mod catalog;
pub mod order;
pub mod product;
pub mod report;
