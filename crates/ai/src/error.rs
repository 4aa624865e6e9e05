use thiserror::Error;

/// Failures at the AI boundary.
///
/// `EmptyOutput` is deliberately distinct from `ShapeMismatch`: a model that
/// produced nothing at all is worth retrying; a model that produced the
/// wrong shape usually is not, and its raw output is kept for inspection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    /// The model call completed but produced no output.
    #[error("AI failed to provide an output")]
    EmptyOutput,

    /// The item-list field was neither the expected array nor a JSON string
    /// parseable into one.
    #[error("AI returned an unexpected format for the item list: {0}")]
    ShapeMismatch(String),

    /// The model call itself failed (network/provider error). The message
    /// is surfaced verbatim to the caller.
    #[error("{0}")]
    Transport(String),

    /// Invalid request handed to the boundary (e.g. a non-image payload).
    #[error("invalid model input: {0}")]
    InvalidInput(String),
}

impl AiError {
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
