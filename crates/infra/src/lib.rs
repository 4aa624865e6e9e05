//! `stockpilot-infra`
//!
//! Infrastructure around the inventory domain: store implementations, the
//! seeding inventory service, the two AI pipelines, and telemetry init.

pub mod pipelines;
pub mod seed;
pub mod service;
pub mod store;
pub mod telemetry;


pub use pipelines::{PipelineError, recognition, restock};
pub use service::InventoryService;
pub use store::{InventoryStore, MemoryStore, StoreError, json_file::JsonFileStore};
