//! Persisted inventory store boundary.
//!
//! The store is the ground truth for item records: a keyed collection with
//! whole-collection load/save. Saves replace the entire collection in one
//! step, so a reader never observes a partially-merged batch.

use thiserror::Error;

use stockpilot_inventory::InventoryItem;

pub mod in_memory;
pub mod json_file;

pub use in_memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt inventory snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Whole-collection persistence for inventory items.
pub trait InventoryStore: Send + Sync {
    /// Load the persisted collection. `Ok(None)` means nothing has ever
    /// been saved — callers typically seed demo data in that case. An
    /// explicitly saved empty collection loads as `Ok(Some(vec![]))`.
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError>;

    /// Atomically replace the persisted collection.
    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError>;
}
