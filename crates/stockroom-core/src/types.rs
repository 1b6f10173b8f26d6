//! # Entity Types
//!
//! Core entity types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │  FetchStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │◄ ─│  product_id?    │   │  Idle           │       │
//! │  │  name           │   │  product_name   │   │  Loading        │       │
//! │  │  category       │   │  quantity (>0)  │   │  Succeeded      │       │
//! │  │  stock, sold    │   │  date           │   │  Failed         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Inputs:  NewProduct, ProductEdit, NewOrder, CatalogRecord, RawCount    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Back-Reference, Not Ownership
//! An order copies the product name at order time and keeps the product id
//! only as a hint. Deleting a product leaves its orders untouched.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Identifiers
// =============================================================================

/// Product identifier, unique within the product collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ProductId(raw)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order identifier. Handed out by a monotonic counter and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        OrderId(raw)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, immutable once assigned.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Category used for filtering.
    pub category: String,

    /// Units currently available.
    pub stock: i64,

    /// Cumulative units sold.
    pub sold: i64,
}

impl Product {
    /// Checks whether an order of `quantity` units can be filled from stock.
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.stock
    }
}

/// Input for adding a product by hand.
///
/// `stock` and `sold` arrive as raw form input and are coerced on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub stock: Option<RawCount>,
    #[serde(default)]
    pub sold: Option<RawCount>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            category: category.into(),
            stock: None,
            sold: None,
        }
    }

    pub fn with_stock(mut self, stock: impl Into<RawCount>) -> Self {
        self.stock = Some(stock.into());
        self
    }

    pub fn with_sold(mut self, sold: impl Into<RawCount>) -> Self {
        self.sold = Some(sold.into());
        self
    }
}

/// Direct override of a product's counters.
///
/// Negative values are accepted: this is the trusted manual path and does not
/// check against order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductEdit {
    pub stock: i64,
    pub sold: i64,
}

// =============================================================================
// Raw Count Input
// =============================================================================

/// A loosely typed count, as found in form fields and catalog JSON.
///
/// ## Coercion Rules
/// ```text
/// 10        → 10
/// "10"      → 10
/// " 7 "     → 7
/// 2.9       → 2      (truncated toward zero)
/// ""        → 0
/// "abc"     → 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawCount {
    /// Coerces to an integer, mapping anything unreadable to 0.
    pub fn to_count(&self) -> i64 {
        match self {
            RawCount::Int(value) => *value,
            RawCount::Float(value) => float_to_count(*value),
            RawCount::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return 0;
                }
                text.parse::<i64>()
                    .unwrap_or_else(|_| text.parse::<f64>().map(float_to_count).unwrap_or(0))
            }
        }
    }
}

fn float_to_count(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

impl From<i64> for RawCount {
    fn from(value: i64) -> Self {
        RawCount::Int(value)
    }
}

impl From<f64> for RawCount {
    fn from(value: f64) -> Self {
        RawCount::Float(value)
    }
}

impl From<&str> for RawCount {
    fn from(value: &str) -> Self {
        RawCount::Text(value.to_string())
    }
}

impl From<String> for RawCount {
    fn from(value: String) -> Self {
        RawCount::Text(value)
    }
}

// =============================================================================
// Catalog Record
// =============================================================================

/// One product record as delivered by a catalog loader.
///
/// Every field is optional on the wire: the catalog is external and only
/// loosely follows `{id?, name, category, stock, sold}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: Option<RawCount>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: Option<RawCount>,
    #[serde(default)]
    pub sold: Option<RawCount>,
}

impl CatalogRecord {
    /// The record's own id, if it carries a usable one (positive integer).
    ///
    /// Fractional ids are truncated toward zero, so `2.7` reads as `2`.
    pub fn explicit_id(&self) -> Option<ProductId> {
        let id = self.id.as_ref()?;
        if let RawCount::Float(value) = id {
            if value.fract() != 0.0 {
                debug!(value, name = %self.name, "Truncating fractional catalog id");
            }
        }
        let raw = id.to_count();
        u64::try_from(raw)
            .ok()
            .filter(|id| *id > 0)
            .map(ProductId::new)
    }
}

// =============================================================================
// Fetch Status
// =============================================================================

/// Lifecycle of the catalog load feeding the product collection.
///
/// ```text
///          begin_load            complete_load
///  Idle ───────────────► Loading ──────────────► Succeeded
///   ▲                      │  ▲                     │
///   │                      │  └─────────────────────┤ begin_load (reload)
///   │            fail_load │                        │
///   │                      ▼                        │
///   │                    Failed ──── begin_load ────┘ (retry)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is outstanding. Readers see the previous snapshot.
    Loading,
    /// The last load replaced the collection.
    Succeeded,
    /// The last load failed. The collection is unchanged.
    Failed,
}

impl FetchStatus {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Succeeded => write!(f, "succeeded"),
            FetchStatus::Failed => write!(f, "failed"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed against a product. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: OrderId,
    /// Product the order was placed against, if known.
    pub product_id: Option<ProductId>,
    /// Product name at order time (frozen).
    pub product_name: String,
    /// Units ordered, always > 0.
    pub quantity: i64,
    /// RFC 3339 timestamp, or whatever date string the caller supplied.
    pub date: String,
}

impl Order {
    /// The order date as a UTC instant, when it parses.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_order_date(&self.date)
    }
}

/// Input for the order store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: i64,
    /// Explicit date. The store stamps the current time when absent.
    #[serde(default)]
    pub date: Option<String>,
}

// =============================================================================
// Date Parsing
// =============================================================================

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    // US locale strings, e.g. "10/18/2026, 3:04:05 PM"
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses an order date leniently.
///
/// Values with an offset are converted to UTC; values without one are read as
/// UTC. Returns `None` for anything unreadable.
pub fn parse_order_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_raw_count_coercion() {
        assert_eq!(RawCount::from("10").to_count(), 10);
        assert_eq!(RawCount::from(" 7 ").to_count(), 7);
        assert_eq!(RawCount::from("").to_count(), 0);
        assert_eq!(RawCount::from("abc").to_count(), 0);
        assert_eq!(RawCount::from("2.9").to_count(), 2);
        assert_eq!(RawCount::from(2.9).to_count(), 2);
        assert_eq!(RawCount::from(-3).to_count(), -3);
        assert_eq!(RawCount::from(f64::NAN).to_count(), 0);
    }

    #[test]
    fn test_raw_count_deserializes_loose_json() {
        let values: Vec<RawCount> = serde_json::from_str(r#"[4, "12", 1.5, ""]"#).unwrap();
        let counts: Vec<i64> = values.iter().map(RawCount::to_count).collect();
        assert_eq!(counts, vec![4, 12, 1, 0]);
    }

    #[test]
    fn test_catalog_record_explicit_id() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"id": 7, "name": "Mug", "category": "Kitchen"}"#).unwrap();
        assert_eq!(record.explicit_id(), Some(ProductId::new(7)));

        let record: CatalogRecord =
            serde_json::from_str(r#"{"id": "12", "name": "Mug", "category": "Kitchen"}"#).unwrap();
        assert_eq!(record.explicit_id(), Some(ProductId::new(12)));

        for body in [
            r#"{"name": "Mug"}"#,
            r#"{"id": null, "name": "Mug"}"#,
            r#"{"id": 0, "name": "Mug"}"#,
            r#"{"id": "sku-1", "name": "Mug"}"#,
        ] {
            let record: CatalogRecord = serde_json::from_str(body).unwrap();
            assert_eq!(record.explicit_id(), None, "{body}");
        }
    }

    #[test]
    fn test_fractional_catalog_id_truncates() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"id": 2.7, "name": "Mug", "category": "Kitchen"}"#).unwrap();
        assert_eq!(record.id, Some(RawCount::Float(2.7)));
        assert_eq!(record.explicit_id(), Some(ProductId::new(2)));
    }

    #[test]
    fn test_product_can_fulfil() {
        let product = Product {
            id: ProductId::new(1),
            name: "Hat".to_string(),
            category: "Apparel".to_string(),
            stock: 4,
            sold: 0,
        };
        assert!(product.can_fulfil(4));
        assert!(!product.can_fulfil(5));
        assert!(!product.can_fulfil(0));
    }

    #[test]
    fn test_parse_order_date_shapes() {
        let rfc = parse_order_date("2025-10-01T23:30:00+02:00").unwrap();
        assert_eq!(rfc, Utc.with_ymd_and_hms(2025, 10, 1, 21, 30, 0).unwrap());

        let day = parse_order_date("2025-10-02").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap());

        let naive = parse_order_date("2025-10-03 08:15:00").unwrap();
        assert_eq!(naive.hour(), 8);

        let locale = parse_order_date("10/18/2026, 3:04:05 PM").unwrap();
        assert_eq!((locale.month(), locale.day(), locale.hour()), (10, 18, 15));

        assert!(parse_order_date("").is_none());
        assert!(parse_order_date("yesterday").is_none());
        assert!(parse_order_date("2025-13-45").is_none());
    }

    #[test]
    fn test_fetch_status_default() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
        assert_eq!(FetchStatus::Loading.to_string(), "loading");
    }
}
