//! # Store Module
//!
//! In-memory stores for products and orders.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Independent Stores                               │
//! │                                                                         │
//! │  ProductStore                         OrderStore                        │
//! │  ├── add(new_product)                 ├── add(new_order, now)           │
//! │  ├── edit(id, stock/sold)             ├── delete(id)                    │
//! │  ├── delete(id)                       └── clear()                       │
//! │  └── begin/complete/fail_load                                           │
//! │                                                                         │
//! │  Neither store reaches into the other. The only operation that          │
//! │  writes both is `transaction::place_order`.                             │
//! │                                                                         │
//! │  Callers never touch the collections directly: they read slices         │
//! │  (`products()`, `orders()`) and mutate through the methods above.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
pub mod product;

pub use order::OrderStore;
pub use product::ProductStore;
