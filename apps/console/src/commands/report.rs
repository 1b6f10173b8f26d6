//! # Report Commands
//!
//! Dashboard and reports page views. Every call recomputes from the current
//! stores; nothing is cached between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockroom_core::report::{self, DailyVolume, LowStockItem, Totals};
use stockroom_core::Product;
use tracing::debug;

use crate::state::{ConsoleConfig, Inventory, InventoryState};

/// Dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub store_name: String,
    pub totals: Totals,
    /// Every product by units sold, highest first.
    pub top_sellers: Vec<Product>,
    pub low_stock: Vec<LowStockItem>,
    pub recent_activity: Vec<String>,
}

/// Reports page view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsResponse {
    pub totals: Totals,
    /// The first `top_sellers_limit` products by units sold.
    pub top_sellers: Vec<Product>,
    pub daily_volume: Vec<DailyVolume>,
    pub weekly_order_count: usize,
    pub top_product: Option<Product>,
    pub insights: Vec<String>,
}

fn dashboard(inventory: &Inventory, config: &ConsoleConfig) -> DashboardResponse {
    let products = inventory.products.products();
    let orders = inventory.orders.orders();

    DashboardResponse {
        store_name: config.store.name.clone(),
        totals: report::totals(products, orders),
        top_sellers: report::top_sellers(products),
        low_stock: report::low_stock(products),
        recent_activity: report::recent_activity(products),
    }
}

fn reports(inventory: &Inventory, config: &ConsoleConfig, now: DateTime<Utc>) -> ReportsResponse {
    let products = inventory.products.products();
    let orders = inventory.orders.orders();

    ReportsResponse {
        totals: report::totals(products, orders),
        top_sellers: report::top_sellers_n(products, config.reports.top_sellers_limit),
        daily_volume: report::daily_order_volume(orders),
        weekly_order_count: report::weekly_orders(orders, now).len(),
        top_product: report::top_product(products).cloned(),
        insights: report::insights(products, orders, now),
    }
}

/// Gets the dashboard view.
pub fn get_dashboard(state: &InventoryState, config: &ConsoleConfig) -> DashboardResponse {
    debug!("get_dashboard command");
    state.with_inventory(|inv| dashboard(inv, config))
}

/// Gets the reports page view, with the weekly window ending now.
pub fn get_reports(state: &InventoryState, config: &ConsoleConfig) -> ReportsResponse {
    debug!("get_reports command");
    let now = Utc::now();
    state.with_inventory(|inv| reports(inv, config, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order::place_order;
    use crate::commands::product::add_product;
    use chrono::TimeZone;
    use stockroom_core::{NewOrder, NewProduct};

    fn stocked_state() -> InventoryState {
        let state = InventoryState::new();
        add_product(&state, NewProduct::new("Lamp", "Home").with_stock(20).with_sold(4));
        add_product(&state, NewProduct::new("Mug", "Kitchen").with_stock(1).with_sold(12));
        add_product(&state, NewProduct::new("Rug", "Home").with_stock(3));
        state
    }

    #[test]
    fn test_dashboard() {
        let state = stocked_state();
        let mut config = ConsoleConfig::default();
        config.store.name = "Corner Shop".to_string();

        let view = get_dashboard(&state, &config);

        assert_eq!(view.store_name, "Corner Shop");
        assert_eq!(view.totals.total_products, 3);
        assert_eq!(view.totals.low_stock_count, 2);
        assert_eq!(view.top_sellers.len(), 3);
        assert_eq!(view.top_sellers[0].name, "Mug");
        assert_eq!(view.low_stock.len(), 2);
        assert_eq!(
            view.recent_activity,
            vec![
                "New order processed (16 items sold)",
                "Low stock alert: Mug (1 left)",
                "Low stock alert: Rug (3 left)",
            ]
        );
    }

    #[test]
    fn test_reports_after_orders() {
        let state = stocked_state();
        let lamp = state.with_inventory(|inv| inv.products.products()[0].id);
        place_order(&state, lamp, 2).unwrap();
        place_order(&state, lamp, 3).unwrap();

        let mut config = ConsoleConfig::default();
        config.reports.top_sellers_limit = 2;

        let view = get_reports(&state, &config);

        assert_eq!(view.top_sellers.len(), 2);
        assert_eq!(view.totals.total_orders, 2);
        assert_eq!(view.totals.total_quantity_ordered, 5);
        assert_eq!(view.weekly_order_count, 2);
        assert_eq!(view.daily_volume.iter().map(|d| d.total_quantity).sum::<i64>(), 5);
        assert_eq!(view.insights[2], "Total orders this week: 2");
    }

    #[test]
    fn test_reports_window_and_series() {
        let state = stocked_state();
        state.with_inventory_mut(|inv| {
            for (date, quantity) in [("2025-10-07T10:00:00Z", 2), ("2025-09-01", 1), ("bad", 7)] {
                inv.orders
                    .add(
                        NewOrder {
                            product_id: None,
                            product_name: "Lamp".to_string(),
                            quantity,
                            date: Some(date.to_string()),
                        },
                        Utc::now(),
                    )
                    .unwrap();
            }
        });

        let now = Utc.with_ymd_and_hms(2025, 10, 8, 12, 0, 0).unwrap();
        let view = state.with_inventory(|inv| reports(inv, &ConsoleConfig::default(), now));

        assert_eq!(view.weekly_order_count, 1);
        assert_eq!(view.daily_volume.len(), 2);
        assert_eq!(view.top_product.map(|p| p.name), Some("Mug".to_string()));
        assert_eq!(view.insights[1], "Low stock products: Mug, Rug");
    }
}
