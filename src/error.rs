//! Error types for parsing options and preparing share drafts.

use thiserror::Error;

/// Result type alias for fallible share-copy operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown tone: {0:?}")]
    UnknownTone(String),

    #[error("unknown length: {0:?} (expected short, medium or long)")]
    UnknownLength(String),

    /// `min` must not exceed `max`, and `max` must be positive.
    #[error("invalid length range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },

    /// The resource name is blank after trimming.
    #[error("resource name is empty")]
    EmptyName,
}
