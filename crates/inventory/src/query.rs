//! Search and sort helpers for the inventory table view.

use crate::item::InventoryItem;

/// Column to sort the inventory table by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Quantity,
    Price,
    Barcode,
    LastUpdated,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Items whose name contains `term`, case-insensitively. An empty term
/// matches everything.
pub fn filter_by_name<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by the given key and direction. Missing barcodes compare as
/// empty strings, so they group together at one end.
pub fn sort_items(items: &mut [InventoryItem], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Price => a.price_cents.cmp(&b.price_cents),
            SortKey::Barcode => a
                .barcode
                .as_deref()
                .unwrap_or("")
                .cmp(b.barcode.as_deref().unwrap_or("")),
            SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
