//! # Report Aggregator
//!
//! Pure functions that turn the product and order collections into the
//! numbers and lines shown on the dashboard, reports and orders pages.
//!
//! ## Report Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (&[Product], &[Order], now)                                            │
//! │        │                                                                │
//! │        ├──► totals()               counts and sums                      │
//! │        ├──► top_sellers(_n)()      by sold, descending, stable          │
//! │        ├──► low_stock()            stock < 5, collection order          │
//! │        ├──► daily_order_volume()   quantity per UTC day, ascending      │
//! │        ├──► weekly_orders()        date >= now - 7 days                 │
//! │        ├──► top_product()          max sold, earliest wins ties         │
//! │        ├──► insights()             three summary lines                  │
//! │        ├──► recent_activity()      dashboard feed                       │
//! │        └──► orders_summary()       orders page header                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is cached; every view is recomputed from the slices passed in.
//! Sums saturate at the `i64` bounds, since `edit` accepts any count.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Order, Product};
use crate::validation::is_low_stock;
use crate::WEEKLY_WINDOW_DAYS;

// =============================================================================
// Report Types
// =============================================================================

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub total_sold: i64,
    pub total_stock: i64,
    pub total_orders: usize,
    pub total_quantity_ordered: i64,
}

/// A product that needs restocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowStockItem {
    pub name: String,
    pub category: String,
    /// Units left in stock.
    pub quantity: i64,
}

/// Units ordered on one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolume {
    #[ts(as = "String")]
    pub day: NaiveDate,
    pub total_quantity: i64,
}

/// Header numbers for the orders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrdersSummary {
    pub total_orders: usize,
    pub total_quantity: i64,
}

// =============================================================================
// Aggregates
// =============================================================================

fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

pub fn totals(products: &[Product], orders: &[Order]) -> Totals {
    Totals {
        total_products: products.len(),
        low_stock_count: products.iter().filter(|p| is_low_stock(p)).count(),
        total_sold: saturating_sum(products.iter().map(|p| p.sold)),
        total_stock: saturating_sum(products.iter().map(|p| p.stock)),
        total_orders: orders.len(),
        total_quantity_ordered: saturating_sum(orders.iter().map(|o| o.quantity)),
    }
}

pub fn orders_summary(orders: &[Order]) -> OrdersSummary {
    OrdersSummary {
        total_orders: orders.len(),
        total_quantity: saturating_sum(orders.iter().map(|o| o.quantity)),
    }
}

/// Every product ordered by `sold`, highest first.
///
/// The sort is stable: products with equal `sold` keep collection order.
pub fn top_sellers(products: &[Product]) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.sold.cmp(&a.sold));
    ranked
}

/// The first `n` entries of [`top_sellers`].
pub fn top_sellers_n(products: &[Product], n: usize) -> Vec<Product> {
    let mut ranked = top_sellers(products);
    ranked.truncate(n);
    ranked
}

pub fn low_stock(products: &[Product]) -> Vec<LowStockItem> {
    products
        .iter()
        .filter(|p| is_low_stock(p))
        .map(|p| LowStockItem {
            name: p.name.clone(),
            category: p.category.clone(),
            quantity: p.stock,
        })
        .collect()
}

/// The best-selling product. The earliest one wins a tie.
pub fn top_product(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, p| if p.sold > best.sold { p } else { best })
}

// =============================================================================
// Time Series
// =============================================================================

/// Quantity ordered per UTC day, oldest day first.
///
/// Orders whose date does not parse are left out.
pub fn daily_order_volume(orders: &[Order]) -> Vec<DailyVolume> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for order in orders {
        if let Some(timestamp) = order.timestamp() {
            let total = by_day.entry(timestamp.date_naive()).or_insert(0);
            *total = total.saturating_add(order.quantity);
        }
    }

    by_day
        .into_iter()
        .map(|(day, total_quantity)| DailyVolume {
            day,
            total_quantity,
        })
        .collect()
}

/// Orders dated within the last [`WEEKLY_WINDOW_DAYS`] days of `now`.
///
/// The window start is inclusive. Orders with unreadable dates are excluded.
pub fn weekly_orders(orders: &[Order], now: DateTime<Utc>) -> Vec<&Order> {
    let since = now - Duration::days(WEEKLY_WINDOW_DAYS);
    orders
        .iter()
        .filter(|o| o.timestamp().is_some_and(|at| at >= since))
        .collect()
}

// =============================================================================
// Text Lines
// =============================================================================

/// The three summary lines on the reports page.
pub fn insights(products: &[Product], orders: &[Order], now: DateTime<Utc>) -> Vec<String> {
    let top = match top_product(products) {
        Some(p) => format!("Top selling product: {} ({} units sold)", p.name, p.sold),
        None => "Top selling product: none".to_string(),
    };

    let low: Vec<&str> = products
        .iter()
        .filter(|p| is_low_stock(p))
        .map(|p| p.name.as_str())
        .collect();
    let low = if low.is_empty() {
        "Low stock products: none".to_string()
    } else {
        format!("Low stock products: {}", low.join(", "))
    };

    let weekly = format!("Total orders this week: {}", weekly_orders(orders, now).len());

    vec![top, low, weekly]
}

/// Dashboard activity feed.
pub fn recent_activity(products: &[Product]) -> Vec<String> {
    let total_sold = saturating_sum(products.iter().map(|p| p.sold));

    std::iter::once(format!("New order processed ({total_sold} items sold)"))
        .chain(
            products
                .iter()
                .filter(|p| is_low_stock(p))
                .map(|p| format!("Low stock alert: {} ({} left)", p.name, p.stock)),
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderId, ProductId};
    use chrono::TimeZone;

    fn product(id: u64, name: &str, stock: i64, sold: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "General".to_string(),
            stock,
            sold,
        }
    }

    fn order(id: u64, quantity: i64, date: &str) -> Order {
        Order {
            id: OrderId::new(id),
            product_id: None,
            product_name: "Any".to_string(),
            quantity,
            date: date.to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 8, 12, 0, 0).unwrap()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_totals() {
        let products = vec![product(1, "A", 10, 2), product(2, "B", 3, 7)];
        let orders = vec![order(1, 2, "2025-10-01"), order(2, 5, "2025-10-02")];

        let totals = totals(&products, &orders);
        assert_eq!(
            totals,
            Totals {
                total_products: 2,
                low_stock_count: 1,
                total_sold: 9,
                total_stock: 13,
                total_orders: 2,
                total_quantity_ordered: 7,
            }
        );
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&[], &[]), Totals::default());
        assert_eq!(orders_summary(&[]), OrdersSummary::default());
    }

    #[test]
    fn test_top_sellers_is_stable() {
        let products = vec![
            product(1, "A", 9, 5),
            product(2, "B", 9, 8),
            product(3, "C", 9, 5),
            product(4, "D", 9, 1),
        ];

        assert_eq!(names(&top_sellers(&products)), vec!["B", "A", "C", "D"]);
        assert_eq!(names(&top_sellers_n(&products, 2)), vec!["B", "A"]);
        assert_eq!(top_sellers_n(&products, 10).len(), 4);
    }

    #[test]
    fn test_top_product_tie_keeps_earliest() {
        let products = vec![product(1, "A", 9, 5), product(2, "B", 9, 5)];
        assert_eq!(top_product(&products).map(|p| p.name.as_str()), Some("A"));
        assert!(top_product(&[]).is_none());
    }

    #[test]
    fn test_low_stock_items() {
        let products = vec![
            product(1, "Plenty", 50, 0),
            product(2, "Scarce", 2, 0),
            product(3, "Edge", 5, 0),
            product(4, "Gone", 0, 0),
        ];

        let low = low_stock(&products);
        assert_eq!(low.len(), 2);
        assert_eq!(low[0].name, "Scarce");
        assert_eq!(low[0].quantity, 2);
        assert_eq!(low[1].name, "Gone");
    }

    #[test]
    fn test_daily_order_volume_groups_by_utc_day() {
        let orders = vec![
            order(1, 3, "2025-10-02T09:00:00Z"),
            order(2, 1, "2025-10-01T23:30:00Z"),
            order(3, 2, "2025-10-02T01:00:00+02:00"), // 2025-10-01 23:00 UTC
            order(4, 4, "2025-10-02"),
            order(5, 9, "not a date"),
        ];

        let series = daily_order_volume(&orders);
        let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
        assert_eq!(
            series,
            vec![
                DailyVolume { day: day(1), total_quantity: 3 },
                DailyVolume { day: day(2), total_quantity: 7 },
            ]
        );
    }

    #[test]
    fn test_daily_order_volume_merges_same_day() {
        let orders = vec![
            order(1, 5, "2025-10-01"),
            order(2, 3, "2025-10-01"),
            order(3, 2, "2025-10-02"),
        ];

        let series: Vec<(String, i64)> = daily_order_volume(&orders)
            .into_iter()
            .map(|d| (d.day.to_string(), d.total_quantity))
            .collect();
        assert_eq!(
            series,
            vec![("2025-10-01".to_string(), 8), ("2025-10-02".to_string(), 2)]
        );
    }

    #[test]
    fn test_sums_saturate_on_extreme_counts() {
        let products = vec![product(1, "A", i64::MAX, i64::MAX), product(2, "B", 10, 1)];
        let orders = vec![
            order(1, i64::MAX, "2025-10-01"),
            order(2, 4, "2025-10-01"),
        ];

        let totals = totals(&products, &orders);
        assert_eq!(totals.total_sold, i64::MAX);
        assert_eq!(totals.total_stock, i64::MAX);
        assert_eq!(totals.total_quantity_ordered, i64::MAX);
        assert_eq!(orders_summary(&orders).total_quantity, i64::MAX);
        assert_eq!(daily_order_volume(&orders)[0].total_quantity, i64::MAX);
        assert_eq!(
            recent_activity(&products)[0],
            format!("New order processed ({} items sold)", i64::MAX)
        );
    }

    #[test]
    fn test_weekly_window_is_inclusive() {
        let orders = vec![
            order(1, 1, "2025-10-01T12:00:00Z"), // exactly 7 days
            order(2, 1, "2025-10-01T11:59:59Z"), // just outside
            order(3, 1, "2025-10-08T08:00:00Z"),
            order(4, 1, "garbage"),
        ];

        let ids: Vec<u64> = weekly_orders(&orders, now())
            .iter()
            .map(|o| o.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_insights_lines() {
        let products = vec![
            product(1, "Lamp", 20, 4),
            product(2, "Mug", 1, 12),
            product(3, "Rug", 3, 0),
        ];
        let orders = vec![order(1, 2, "2025-10-07T10:00:00Z"), order(2, 1, "2025-09-01")];

        assert_eq!(
            insights(&products, &orders, now()),
            vec![
                "Top selling product: Mug (12 units sold)".to_string(),
                "Low stock products: Mug, Rug".to_string(),
                "Total orders this week: 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_insights_empty() {
        assert_eq!(
            insights(&[], &[], now()),
            vec![
                "Top selling product: none".to_string(),
                "Low stock products: none".to_string(),
                "Total orders this week: 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_recent_activity() {
        let products = vec![product(1, "Lamp", 20, 4), product(2, "Mug", 1, 12)];
        assert_eq!(
            recent_activity(&products),
            vec![
                "New order processed (16 items sold)".to_string(),
                "Low stock alert: Mug (1 left)".to_string(),
            ]
        );
    }

    #[test]
    fn test_orders_summary() {
        let orders = vec![order(1, 2, "2025-10-01"), order(2, 6, "2025-10-02")];
        assert_eq!(
            orders_summary(&orders),
            OrdersSummary {
                total_orders: 2,
                total_quantity: 8,
            }
        );
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let json = serde_json::to_value(totals(&[], &[])).unwrap();
        assert!(json.get("lowStockCount").is_some());
        assert!(json.get("totalQuantityOrdered").is_some());
    }
}

// =============================================================================
// Property Tests
// =============================================================================
