//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Store and transaction failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Catalog load failures                          │
//! │                                                                         │
//! │  Console API errors (in app)                                           │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Which Errors Escape?
//! Validation on add is absorbed by the command layer (logged, no state
//! change). An unknown id on edit/delete is not an error at all: the store
//! reports it as `false`/`None`. Order transaction failures and catalog
//! failures are surfaced to the caller.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Store and transaction errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order transaction refused to run.
    ///
    /// ## When This Occurs
    /// - The product id is unknown (`available` is `None`)
    /// - The requested quantity is larger than the current stock
    ///
    /// ## User Workflow
    /// ```text
    /// place_order(product 3, qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStockOrInvalidProduct { product_id: 3, requested: 5, available: Some(3) }
    ///      │
    ///      ▼
    /// Console shows: "Product not available or insufficient stock"
    /// ```
    #[error("Product not available or insufficient stock (product {product_id}, requested {requested})")]
    InsufficientStockOrInvalidProduct {
        product_id: ProductId,
        requested: i64,
        available: Option<i64>,
    },

    /// Moving the units would push `stock` or `sold` past the `i64` range.
    ///
    /// ## When This Occurs
    /// Only after `edit` has set a count near `i64::MAX`; orders alone keep
    /// `sold` well below it.
    #[error("Count out of range for product {product_id} (requested {requested})")]
    CountOverflow {
        product_id: ProductId,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn must_be_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStockOrInvalidProduct {
            product_id: ProductId::new(3),
            requested: 5,
            available: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "Product not available or insufficient stock (product 3, requested 5)"
        );
        assert_eq!(
            CoreError::CountOverflow {
                product_id: ProductId::new(9),
                requested: 1,
            }
            .to_string(),
            "Count out of range for product 9 (requested 1)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::must_be_positive("quantity").to_string(),
            "quantity must be positive"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("category").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
