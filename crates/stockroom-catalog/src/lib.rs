//! # stockroom-catalog: Catalog Loaders for Stockroom
//!
//! Fetches the external product catalog. The product store never does I/O
//! itself: the console asks a [`CatalogLoader`] for records and hands the
//! outcome to `ProductStore::complete_load` or `ProductStore::fail_load`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Load                                     │
//! │                                                                         │
//! │  console: load_catalog                                                 │
//! │       │  1. lock, begin_load(), unlock                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               stockroom-catalog (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐        ┌──────────────────┐              │   │
//! │  │   │ JsonFileCatalog  │        │  StaticCatalog   │              │   │
//! │  │   │ tokio::fs + JSON │        │  seeded / fixed  │              │   │
//! │  │   └──────────────────┘        └──────────────────┘              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │  2. await Vec<CatalogRecord> or CatalogError                   │
//! │       ▼                                                                 │
//! │  console: lock, complete_load() / fail_load(), unlock                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_catalog::{CatalogLoader, StaticCatalog};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let records = StaticCatalog::seeded().load().await.unwrap();
//! assert!(!records.is_empty());
//! # });
//! ```

use std::future::Future;
use std::path::PathBuf;

use stockroom_core::CatalogRecord;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod seeded;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use file::JsonFileCatalog;
pub use seeded::StaticCatalog;

// =============================================================================
// Loader Trait
// =============================================================================

/// Source of product records for the product store.
///
/// A load either yields the whole record list or fails; there is no partial
/// result. Loaders hold no store state, so one loader can serve many loads.
pub trait CatalogLoader: Send + Sync {
    /// Fetches the full catalog.
    fn load(&self) -> impl Future<Output = CatalogResult<Vec<CatalogRecord>>> + Send;

    /// Short label for logs, e.g. `seeded` or `file:/path/catalog.json`.
    fn describe(&self) -> String;
}

/// The loader chosen by configuration.
#[derive(Debug, Clone)]
pub enum Catalog {
    Static(StaticCatalog),
    File(JsonFileCatalog),
}

impl Catalog {
    pub fn seeded() -> Self {
        Catalog::Static(StaticCatalog::seeded())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Catalog::File(JsonFileCatalog::new(path))
    }
}

impl CatalogLoader for Catalog {
    async fn load(&self) -> CatalogResult<Vec<CatalogRecord>> {
        match self {
            Catalog::Static(catalog) => catalog.load().await,
            Catalog::File(catalog) => catalog.load().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Catalog::Static(catalog) => catalog.describe(),
            Catalog::File(catalog) => catalog.describe(),
        }
    }
}

impl From<StaticCatalog> for Catalog {
    fn from(catalog: StaticCatalog) -> Self {
        Catalog::Static(catalog)
    }
}

impl From<JsonFileCatalog> for Catalog {
    fn from(catalog: JsonFileCatalog) -> Self {
        Catalog::File(catalog)
    }
}
