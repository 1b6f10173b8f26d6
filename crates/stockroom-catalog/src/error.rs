//! # Catalog Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the catalog path                    │
//! │       │                                                                 │
//! │       ├──► ProductStore::fail_load(message)                             │
//! │       ▼                                                                 │
//! │  ApiError (in console) ← Serialized for the presentation layer         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Catalog load failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    ///
    /// ## When This Occurs
    /// - The configured path does not exist
    /// - File permissions issue
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog body is not a JSON array of product records.
    #[error("Invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog source refused to answer.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
