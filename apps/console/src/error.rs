//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  stdin: "order 3 50"                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::Io(...) ─────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Core Error? ─── InsufficientStockOrInvalidProduct ── ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stdout: {"error": {"code": "INSUFFICIENT_STOCK", "message": "..."}}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockroom_catalog::CatalogError;
use stockroom_core::CoreError;

/// API error returned from console commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Product not available or insufficient stock"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Order refused: unknown product or not enough stock
    InsufficientStock,

    /// Catalog could not be loaded
    CatalogError,

    /// Console line could not be parsed
    InvalidCommand,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unparseable-command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStockOrInvalidProduct { .. } => ApiError::new(
                ErrorCode::InsufficientStock,
                "Product not available or insufficient stock",
            ),
            CoreError::CountOverflow { .. } => {
                ApiError::validation("Stock or sold count out of range")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if let CatalogError::Io { source, .. } = &err {
            tracing::error!(kind = ?source.kind(), "Catalog file unreadable");
        }
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{ProductId, ValidationError};

    #[test]
    fn test_insufficient_stock_maps_to_fixed_message() {
        let err: ApiError = CoreError::InsufficientStockOrInvalidProduct {
            product_id: ProductId::new(2),
            requested: 9,
            available: Some(1),
        }
        .into();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Product not available or insufficient stock");
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: ApiError = CoreError::from(ValidationError::required("name")).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_count_overflow_maps_to_validation_code() {
        let err: ApiError = CoreError::CountOverflow {
            product_id: ProductId::new(4),
            requested: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Stock or sold count out of range");
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_string(&ApiError::invalid_command("unknown command: foo")).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_COMMAND","message":"unknown command: foo"}"#);
    }
}
