//! Inventory service: CRUD over a persisted store, with demo seeding.
//!
//! Persistence failures on save are logged and swallowed (the in-memory
//! view stays correct; the session just loses durability), matching the
//! store's role as a local single-user cache rather than a shared backend.

use chrono::Utc;

use stockpilot_core::{DomainError, DomainResult, ItemId};
use stockpilot_inventory::{
    InventoryItem, InventoryStats, ItemDraft, LOW_STOCK_THRESHOLD, RecognizedArtSupply, reconcile,
};

use crate::seed;
use crate::store::InventoryStore;

pub struct InventoryService<S> {
    store: S,
    low_stock_threshold: i64,
}

impl<S: InventoryStore> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the collection, seeding the demo dataset when the store has
    /// never been written or cannot be read. The seed is persisted so the
    /// next load sees the same records.
    pub fn load_or_seed(&self) -> Vec<InventoryItem> {
        match self.store.load() {
            Ok(Some(items)) => items,
            Ok(None) => {
                tracing::info!("store empty, seeding demo inventory");
                self.seeded()
            }
            Err(e) => {
                tracing::warn!(error = %e, "store unreadable, falling back to demo inventory");
                self.seeded()
            }
        }
    }

    fn seeded(&self) -> Vec<InventoryItem> {
        let items = seed::demo_inventory(Utc::now());
        self.save_logged(&items);
        items
    }

    /// Add a new item from user input; newest items go to the front, the
    /// way the inventory page lists them.
    pub fn add_item(&self, draft: ItemDraft) -> DomainResult<InventoryItem> {
        let item = InventoryItem::create(draft, Utc::now())?;
        let mut items = self.load_or_seed();
        items.insert(0, item.clone());
        self.save_logged(&items);
        Ok(item)
    }

    /// Edit an existing item in place, stamping `last_updated`.
    pub fn update_item(&self, id: ItemId, draft: ItemDraft) -> DomainResult<InventoryItem> {
        let mut items = self.load_or_seed();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::NotFound)?;
        item.apply_edit(draft, Utc::now())?;
        let updated = item.clone();
        self.save_logged(&items);
        Ok(updated)
    }

    pub fn delete_item(&self, id: ItemId) -> DomainResult<()> {
        let mut items = self.load_or_seed();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound);
        }
        self.save_logged(&items);
        Ok(())
    }

    /// Merge a recognized batch into the store as one atomic replace and
    /// return the updated collection.
    ///
    /// Not idempotent for non-empty batches (quantities accumulate); call
    /// once per physical recognition event.
    pub fn commit_recognized(&self, recognized: &[RecognizedArtSupply]) -> Vec<InventoryItem> {
        let merged = reconcile(self.load_or_seed(), recognized, Utc::now());
        self.save_logged(&merged);
        merged
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(&self.load_or_seed(), self.low_stock_threshold)
    }

    fn save_logged(&self, items: &[InventoryItem]) {
        if let Err(e) = self.store.save(items) {
            tracing::error!(error = %e, "failed to persist inventory; changes will not survive this session");
        }
    }
}
