//! In-memory store for tests and ephemeral sessions.

use std::sync::Mutex;

use stockpilot_inventory::InventoryItem;

use super::{InventoryStore, StoreError};

/// Mutex-backed store holding the collection in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Option<Vec<InventoryItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-populated collection.
    pub fn seeded(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Mutex::new(Some(items)),
        }
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError> {
        let guard = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        let mut guard = self.items.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(items.to_vec());
        Ok(())
    }
}
