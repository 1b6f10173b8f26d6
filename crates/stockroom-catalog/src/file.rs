//! JSON file catalog.
//!
//! The file holds a JSON array of loosely typed records:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Desk Lamp", "category": "Home", "stock": 12, "sold": 3 },
//!   { "name": "Teapot", "category": "Kitchen", "stock": "7", "sold": "" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use stockroom_core::CatalogRecord;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::CatalogLoader;

/// Reads the catalog from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileCatalog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogLoader for JsonFileCatalog {
    async fn load(&self) -> CatalogResult<Vec<CatalogRecord>> {
        debug!(path = %self.path.display(), "Reading catalog file");

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<CatalogRecord> =
            serde_json::from_str(&body).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(count = records.len(), "Catalog file parsed");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
