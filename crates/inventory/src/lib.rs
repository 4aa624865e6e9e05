//! Inventory domain module.
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no AI invocation, no storage).

pub mod item;
pub mod query;
pub mod reconcile;
pub mod recognized;
pub mod stats;

pub use item::{InventoryItem, ItemDraft};
pub use query::{SortDirection, SortKey, filter_by_name, sort_items};
pub use reconcile::reconcile;
pub use recognized::{RecognizedArtSupply, RestockRecommendation};
pub use stats::{InventoryStats, LOW_STOCK_THRESHOLD, low_stock};
