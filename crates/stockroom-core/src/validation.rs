//! # Validation Module
//!
//! Guard predicates and input validators for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console command parsing                                      │
//! │  ├── Argument count, integer ids                                       │
//! │  └── Immediate usage hints                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Non-empty name / category                                         │
//! │  ├── Positive order quantity                                           │
//! │  └── Count coercion for loose input                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order transaction                                            │
//! │  └── Quantity must not exceed stock                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{is_valid_order_quantity, validate_product_name};
//!
//! assert!(validate_product_name("Hat").is_ok());
//! assert!(is_valid_order_quantity(3));
//! assert!(!is_valid_order_quantity(0));
//! ```

use crate::error::ValidationError;
use crate::types::{Product, RawCount};
use crate::{LOW_STOCK_THRESHOLD, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Guard Predicates
// =============================================================================

/// True when the product has fewer than [`LOW_STOCK_THRESHOLD`] units left.
#[inline]
pub fn is_low_stock(product: &Product) -> bool {
    product.stock < LOW_STOCK_THRESHOLD
}

/// True for strictly positive order quantities.
#[inline]
pub fn is_valid_order_quantity(quantity: i64) -> bool {
    quantity > 0
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name: must not be blank.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_non_blank("name", name)
}

/// Validates a product category: must not be blank.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    require_non_blank("category", category)
}

/// Validates a search query and returns it trimmed.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum [`MAX_SEARCH_QUERY_LEN`] characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

fn require_non_blank(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity.
pub fn validate_order_quantity(quantity: i64) -> ValidationResult<()> {
    if !is_valid_order_quantity(quantity) {
        return Err(ValidationError::must_be_positive("quantity"));
    }
    Ok(())
}

/// Coerces a raw count for a newly added product.
///
/// Missing or unreadable input becomes 0 and negative input clamps to 0, so a
/// freshly added product never starts with negative counters.
pub fn coerce_initial_count(raw: Option<&RawCount>) -> i64 {
    raw.map(RawCount::to_count).unwrap_or(0).max(0)
}

/// Coerces a raw count for a trusted edit. Negative values pass through.
pub fn coerce_edit_count(raw: Option<&RawCount>) -> i64 {
    raw.map(RawCount::to_count).unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
