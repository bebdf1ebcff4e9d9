//! Error types
//!
//! Every variant is an input-validation failure raised at the call that
//! received the bad input. Nothing is clamped or retried.

use thiserror::Error;

/// Result type for layout generation.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the number stream and the layout generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
    #[error("invalid range: hi ({hi}) < lo ({lo})")]
    InvalidRange { lo: i64, hi: i64 },
    #[error("invalid region count: {0}")]
    InvalidCount(i64),
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    #[error("invalid size range: min {min}, max {max}")]
    InvalidSizeRange { min: i64, max: i64 },
    #[error("overlap-free placement needs at least one attempt per region")]
    InvalidAttempts,
    #[error("overlap-free placement exhausted after {placed} of {requested} regions")]
    PlacementExhausted { placed: usize, requested: usize },
}

/// Errors surfaced while loading, saving or verifying a saved layout.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed layout json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported saved layout format version {0}")]
    UnsupportedVersion(u32),
    #[error("integrity digest mismatch (expected {expected}, found {found})")]
    DigestMismatch { expected: String, found: String },
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}
