//! Merging AI-recognized batches into the inventory collection.

use chrono::{DateTime, Utc};

use stockpilot_core::ItemId;

use crate::item::{InventoryItem, normalize_barcode};
use crate::recognized::RecognizedArtSupply;

/// Merge a recognized batch into the inventory, returning the updated
/// collection. Pure: the caller decides when (and whether) to persist the
/// result, as one atomic replace.
///
/// Rules, per recognized item in input order:
/// - non-positive counts are skipped outright;
/// - names are trimmed and matched case-insensitively against existing
///   items (first match wins when the store holds duplicate names);
/// - a match gains `count` units and a fresh `last_updated`; its barcode is
///   deliberately NOT overwritten, so a model misread cannot clobber a
///   verified barcode (barcode correction is an explicit manual edit);
/// - an unmatched item is appended with a fresh id, the sentinel price `0`
///   ("needs manual pricing"), and the recognized barcode if present.
///
/// Applying the same non-empty batch twice accumulates quantities; call
/// this once per physical recognition event. Same-batch case variants of a
/// new name collapse into one item because each appended item is visible to
/// the matching step for the remainder of the batch.
pub fn reconcile(
    mut inventory: Vec<InventoryItem>,
    recognized: &[RecognizedArtSupply],
    now: DateTime<Utc>,
) -> Vec<InventoryItem> {
    for rec in recognized {
        if rec.count <= 0 {
            continue;
        }

        let name = rec.name.trim();
        let existing = inventory
            .iter()
            .position(|item| item.name.trim().eq_ignore_ascii_case(name));

        match existing {
            Some(i) => inventory[i].add_stock(rec.count, now),
            None => inventory.push(InventoryItem {
                id: ItemId::new(),
                name: name.to_string(),
                quantity: rec.count,
                price_cents: 0,
                barcode: normalize_barcode(rec.barcode.clone()),
                last_updated: now,
            }),
        }
    }

    inventory
}
