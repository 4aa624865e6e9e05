//! Dashboard aggregates over the inventory collection.

use serde::Serialize;

use crate::item::InventoryItem;

/// Default low-stock alert threshold (strictly-below comparison).
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Snapshot of the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Total quantity across all items.
    pub total_units: i64,
    /// Estimated total value of current inventory, in cents.
    pub total_value_cents: u64,
    /// Number of items below the low-stock threshold.
    pub low_stock_count: usize,
}

impl InventoryStats {
    pub fn compute(items: &[InventoryItem], low_stock_threshold: i64) -> Self {
        let total_units = items.iter().map(|i| i.quantity).sum();
        let total_value_cents = items
            .iter()
            .map(|i| i.quantity.max(0) as u64 * i.price_cents)
            .sum();
        let low_stock_count = low_stock(items, low_stock_threshold).count();
        Self {
            total_units,
            total_value_cents,
            low_stock_count,
        }
    }
}

/// Items whose quantity is strictly below `threshold`, in store order.
pub fn low_stock(items: &[InventoryItem], threshold: i64) -> impl Iterator<Item = &InventoryItem> {
    items.iter().filter(move |i| i.quantity < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockpilot_core::ItemId;

    fn item(name: &str, quantity: i64, price_cents: u64) -> InventoryItem {
        InventoryItem {
            id: ItemId::new(),
            name: name.to_string(),
            quantity,
            price_cents,
            barcode: None,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn stats_sum_units_and_value() {
        let items = vec![item("Mouse", 25, 2999), item("Monitor", 5, 29900)];
        let stats = InventoryStats::compute(&items, LOW_STOCK_THRESHOLD);

        assert_eq!(stats.total_units, 30);
        assert_eq!(stats.total_value_cents, 25 * 2999 + 5 * 29900);
        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let items = vec![item("A", 10, 0), item("B", 9, 0), item("C", 0, 0)];
        let low: Vec<_> = low_stock(&items, 10).map(|i| i.name.as_str()).collect();
        assert_eq!(low, vec!["B", "C"]);
    }

    #[test]
    fn empty_inventory_yields_zero_stats() {
        let stats = InventoryStats::compute(&[], LOW_STOCK_THRESHOLD);
        assert_eq!(stats.total_units, 0);
        assert_eq!(stats.total_value_cents, 0);
        assert_eq!(stats.low_stock_count, 0);
    }
}
