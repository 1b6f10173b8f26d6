//! # State Module
//!
//! State shared by the console commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │       InventoryState         │   │       ConsoleConfig          │   │
//! │  │                              │   │                              │   │
//! │  │  Arc<Mutex<Inventory>>       │   │  store name                  │   │
//! │  │   ├── ProductStore           │   │  catalog source / autoload   │   │
//! │  │   └── OrderStore             │   │  top sellers limit           │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • InventoryState: exclusive access through the mutex                  │
//! │  • ConsoleConfig: read-only after startup                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod inventory;

pub use config::{
    CatalogSettings, CatalogSourceKind, ConfigError, ConfigResult, ConsoleConfig, ReportSettings,
    StoreSettings,
};
pub use inventory::{Inventory, InventoryState};
