//! # Catalog Commands
//!
//! Loading the product catalog into the product store.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    load_catalog                                         │
//! │                                                                         │
//! │  1. lock ─► begin_load() ─► unlock                                      │
//! │       │         │                                                       │
//! │       │         └── false (already loading) ─► return current status    │
//! │       ▼                                                                 │
//! │  2. loader.load().await          (no lock held; readers see the         │
//! │       │                           previous products)                    │
//! │       ▼                                                                 │
//! │  3. lock ─► complete_load(records) or fail_load(message) ─► unlock      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ensure_catalog` runs the same sequence only while the store is still
//! `idle`, so opening the dashboard twice does not reload the catalog.

use serde::{Deserialize, Serialize};
use stockroom_catalog::CatalogLoader;
use stockroom_core::FetchStatus;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{Inventory, InventoryState};

/// Catalog fetch status as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatusResponse {
    pub status: FetchStatus,
    pub error: Option<String>,
    pub product_count: usize,
}

impl From<&Inventory> for CatalogStatusResponse {
    fn from(inventory: &Inventory) -> Self {
        CatalogStatusResponse {
            status: inventory.products.status(),
            error: inventory.products.error().map(str::to_string),
            product_count: inventory.products.len(),
        }
    }
}

/// Gets the current fetch status.
pub fn get_catalog_status(state: &InventoryState) -> CatalogStatusResponse {
    debug!("get_catalog_status command");
    state.with_inventory(|inv| CatalogStatusResponse::from(inv))
}

/// Loads the catalog, replacing the product list on success.
///
/// A load already in flight is not duplicated: the call returns the current
/// status instead.
///
/// ## Errors
/// `CATALOG_ERROR` when the loader fails. The store is left `failed` with the
/// previous products, and a later call retries.
pub async fn load_catalog<L>(state: &InventoryState, loader: &L) -> Result<CatalogStatusResponse, ApiError>
where
    L: CatalogLoader,
{
    debug!(source = %loader.describe(), "load_catalog command");

    if !state.with_inventory_mut(|inv| inv.products.begin_load()) {
        return Ok(get_catalog_status(state));
    }

    match loader.load().await {
        Ok(records) => Ok(state.with_inventory_mut(|inv| {
            inv.products.complete_load(records);
            CatalogStatusResponse::from(&*inv)
        })),
        Err(err) => {
            state.with_inventory_mut(|inv| inv.products.fail_load(err.to_string()));
            Err(ApiError::from(err))
        }
    }
}

/// Loads the catalog only if nothing has been requested yet.
pub async fn ensure_catalog<L>(state: &InventoryState, loader: &L) -> Result<CatalogStatusResponse, ApiError>
where
    L: CatalogLoader,
{
    let status = state.with_inventory(|inv| inv.products.status());
    if status != FetchStatus::Idle {
        debug!(%status, "Catalog already requested, skipping load");
        return Ok(get_catalog_status(state));
    }

    info!(source = %loader.describe(), "Loading catalog on first use");
    load_catalog(state, loader).await
}
