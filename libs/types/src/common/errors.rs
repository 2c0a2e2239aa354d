//! Error types for field construction
//!
//! A field is only ever built through the two-digit length rule, so every
//! failure here is a wire-format boundary that the caller crossed.

use thiserror::Error;

/// Errors that can occur while building a TLV field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Content does not fit the two-digit decimal length prefix
    #[error("Content too long for tag {tag}: {length} bytes exceeds maximum {max}")]
    ContentTooLong { tag: String, length: usize, max: usize },

    /// Tag is not exactly two characters wide
    #[error("Invalid tag {tag:?}: tags must be exactly 2 characters")]
    InvalidTag { tag: String },
}
