use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, ItemId};

/// An inventory record, the unit of everything this system tracks.
///
/// Identity is `id`; `name` uniqueness is NOT enforced at the store level
/// (the reconciler enforces case-insensitive logical uniqueness only during
/// AI-driven merges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    /// On-hand quantity. Signed for arithmetic convenience; validated >= 0.
    pub quantity: i64,
    /// Price in smallest currency unit (cents). `0` is the sentinel meaning
    /// "needs manual pricing" on items auto-created by reconciliation.
    pub price_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// User-supplied fields for creating or editing an item.
///
/// `id` and `last_updated` are never user-supplied; creation mints a fresh
/// id and every accepted mutation stamps the mutation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
    pub price_cents: u64,
    pub barcode: Option<String>,
}

impl InventoryItem {
    /// Create a new item from a draft, validating and normalizing fields.
    pub fn create(draft: ItemDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        let price_cents = draft.price_cents;
        let (name, quantity, barcode) = validate_draft(draft)?;
        Ok(Self {
            id: ItemId::new(),
            name,
            quantity,
            price_cents,
            barcode,
            last_updated: now,
        })
    }

    /// Apply an edit in place, stamping `last_updated`.
    pub fn apply_edit(&mut self, draft: ItemDraft, now: DateTime<Utc>) -> DomainResult<()> {
        let price_cents = draft.price_cents;
        let (name, quantity, barcode) = validate_draft(draft)?;
        self.name = name;
        self.quantity = quantity;
        self.price_cents = price_cents;
        self.barcode = barcode;
        self.last_updated = now;
        Ok(())
    }

    /// Increase on-hand quantity (never decreases), stamping `last_updated`.
    pub fn add_stock(&mut self, count: i64, now: DateTime<Utc>) {
        debug_assert!(count > 0);
        self.quantity += count;
        self.last_updated = now;
    }
}

fn validate_draft(draft: ItemDraft) -> DomainResult<(String, i64, Option<String>)> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if draft.quantity < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    let barcode = normalize_barcode(draft.barcode);
    Ok((name, draft.quantity, barcode))
}

/// Trim a barcode and drop it entirely if blank.
pub(crate) fn normalize_barcode(barcode: Option<String>) -> Option<String> {
    barcode
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            price_cents: 1999,
            barcode: None,
        }
    }

    #[test]
    fn create_trims_name_and_stamps_time() {
        let now = Utc::now();
        let item = InventoryItem::create(draft("  Canvas Panel 8x10  ", 3), now).unwrap();
        assert_eq!(item.name, "Canvas Panel 8x10");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.last_updated, now);
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = InventoryItem::create(draft("   ", 1), Utc::now()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_negative_quantity() {
        let err = InventoryItem::create(draft("Gesso", -1), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn edit_replaces_fields_and_updates_timestamp() {
        let t0 = Utc::now();
        let mut item = InventoryItem::create(draft("Gesso", 2), t0).unwrap();
        let t1 = t0 + chrono::Duration::seconds(5);

        item.apply_edit(
            ItemDraft {
                name: "Gesso - 500ml".to_string(),
                quantity: 7,
                price_cents: 1250,
                barcode: Some(" 5011474 ".to_string()),
            },
            t1,
        )
        .unwrap();

        assert_eq!(item.name, "Gesso - 500ml");
        assert_eq!(item.quantity, 7);
        assert_eq!(item.price_cents, 1250);
        assert_eq!(item.barcode.as_deref(), Some("5011474"));
        assert_eq!(item.last_updated, t1);
    }

    #[test]
    fn blank_barcode_is_dropped() {
        assert_eq!(normalize_barcode(Some("   ".to_string())), None);
        assert_eq!(normalize_barcode(None), None);
        assert_eq!(
            normalize_barcode(Some(" 123 ".to_string())),
            Some("123".to_string())
        );
    }
}
