//! Fixed demo dataset used when the store is empty or unreadable.

use chrono::{DateTime, Duration, Utc};

use stockpilot_core::ItemId;
use stockpilot_inventory::InventoryItem;

/// The demo inventory, timestamped relative to `now`.
pub fn demo_inventory(now: DateTime<Utc>) -> Vec<InventoryItem> {
    let entry = |name: &str, quantity: i64, price_cents: u64, days_ago: i64| InventoryItem {
        id: ItemId::new(),
        name: name.to_string(),
        quantity,
        price_cents,
        barcode: None,
        last_updated: now - Duration::days(days_ago),
    };

    vec![
        entry("Wireless Mouse", 25, 2999, 2),
        entry("Mechanical Keyboard", 8, 7999, 1),
        entry("USB-C Hub", 15, 3950, 0),
        entry("4K Monitor", 5, 29900, 5),
        entry("Laptop Stand", 30, 2275, 3),
        entry("Webcam HD", 3, 4999, 7),
        entry("Noise Cancelling Headphones", 12, 19999, 0),
    ]
}

/// Placeholder sales history shown in the restock form.
pub const EXAMPLE_HISTORICAL_SALES: &str = r#"[
  { "itemId": "1", "salesQuantity": 10, "date": "2023-10-01" },
  { "itemId": "1", "salesQuantity": 15, "date": "2023-10-15" },
  { "itemId": "2", "salesQuantity": 5, "date": "2023-10-05" },
  { "itemId": "2", "salesQuantity": 8, "date": "2023-10-20" }
]"#;

/// Placeholder inventory levels shown in the restock form.
pub const EXAMPLE_CURRENT_INVENTORY: &str = r#"[
  { "itemId": "1", "quantity": 25 },
  { "itemId": "2", "quantity": 8 }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_inventory_has_low_stock_entries() {
        let items = demo_inventory(Utc::now());
        assert_eq!(items.len(), 7);
        assert!(items.iter().any(|i| i.quantity < stockpilot_inventory::LOW_STOCK_THRESHOLD));
    }

    #[test]
    fn example_blobs_are_valid_json() {
        serde_json::from_str::<serde_json::Value>(EXAMPLE_HISTORICAL_SALES).unwrap();
        serde_json::from_str::<serde_json::Value>(EXAMPLE_CURRENT_INVENTORY).unwrap();
    }
}
