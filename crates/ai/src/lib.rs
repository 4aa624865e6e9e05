//! `stockpilot-ai`
//!
//! **Responsibility:** the AI-model boundary and result normalization.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on inventory domain types.
//! - It must not mutate domain state.
//! - It turns loosely-typed model output into strictly-typed
//!   results-or-failures that higher layers act on.

pub mod error;
pub mod model;
pub mod normalize;
pub mod payload;

pub use error::AiError;
pub use model::{RecognitionModel, RecognitionRequest, RestockModel, RestockRequest};
pub use normalize::{Normalized, annotate_summary, normalize_items};
pub use payload::AiPayload;
