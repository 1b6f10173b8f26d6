//! # In-Memory Catalog
//!
//! A catalog that answers from memory. [`StaticCatalog::seeded`] ships the
//! demo catalog the console loads when no file is configured.

use stockroom_core::{CatalogRecord, RawCount};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::CatalogLoader;

/// Demo catalog: (name, category, stock, sold).
const SEED_PRODUCTS: &[(&str, &str, i64, i64)] = &[
    ("Wireless Mouse", "Electronics", 34, 58),
    ("USB-C Charger", "Electronics", 3, 91),
    ("Noise-Cancelling Headphones", "Electronics", 12, 27),
    ("Mechanical Keyboard", "Electronics", 8, 44),
    ("Cotton T-Shirt", "Apparel", 120, 210),
    ("Denim Jacket", "Apparel", 4, 19),
    ("Running Shoes", "Apparel", 25, 63),
    ("Ceramic Coffee Mug", "Kitchen", 60, 75),
    ("Chef's Knife", "Kitchen", 2, 31),
    ("Cast Iron Skillet", "Kitchen", 15, 22),
    ("Desk Lamp", "Home", 18, 40),
    ("Throw Pillow", "Home", 0, 12),
];

/// Answers every load with the same records, or the same failure.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    outcome: Result<Vec<CatalogRecord>, String>,
}

impl StaticCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        StaticCatalog {
            outcome: Ok(records),
        }
    }

    /// A catalog whose every load fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        StaticCatalog {
            outcome: Err(message.into()),
        }
    }

    /// The demo catalog. Ids run from 1 in list order.
    pub fn seeded() -> Self {
        let records = SEED_PRODUCTS
            .iter()
            .enumerate()
            .map(|(index, (name, category, stock, sold))| CatalogRecord {
                id: Some(RawCount::Int(index as i64 + 1)),
                name: name.to_string(),
                category: category.to_string(),
                stock: Some(RawCount::Int(*stock)),
                sold: Some(RawCount::Int(*sold)),
            })
            .collect();

        Self::new(records)
    }
}

impl CatalogLoader for StaticCatalog {
    async fn load(&self) -> CatalogResult<Vec<CatalogRecord>> {
        match &self.outcome {
            Ok(records) => {
                debug!(count = records.len(), "Serving in-memory catalog");
                Ok(records.clone())
            }
            Err(message) => Err(CatalogError::Unavailable(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "seeded".to_string()
    }
}
