//! # TLV Field - Atomic Payload Unit
//!
//! ## Purpose
//!
//! A [`Field`] is one `tag + length + content` record of a QRIS payload. The
//! reconstructed wire form is cached in `raw` so that re-serialization is a
//! plain concatenation. The cache can never drift: the only way to build a
//! field is through [`Field::new`], which applies the encode rule.
//!
//! ## Wire Layout
//!
//! ```text
//! ┌─────┬────────┬──────────────────────┐
//! │ tag │ length │ content              │
//! │ 2 B │ 2 B    │ 0..=99 B             │
//! │ "59"│ "21"   │ "Sate Klathak Pak..."│
//! └─────┴────────┴──────────────────────┘
//! ```
//!
//! The length is the byte length of the content rendered as two decimal
//! digits, zero padded. A content of 100 bytes or more cannot be represented.
//!
//! The zero value (`Field::default()`) has an empty tag and an empty raw
//! form. It marks an unset slot and contributes nothing to a serialized
//! payload.

use std::fmt;

use crate::common::errors::FieldError;

/// Width of the tag prefix in bytes
pub const TAG_LENGTH: usize = 2;

/// Width of the decimal length prefix in bytes
pub const LENGTH_DIGITS: usize = 2;

/// Largest content the two-digit length prefix can describe
pub const MAX_CONTENT_LENGTH: usize = 99;

/// Encode a tag and content into their canonical wire form
///
/// Produces `tag + zero_pad(len(content), 2) + content`. Fails when the
/// content is longer than [`MAX_CONTENT_LENGTH`] bytes.
pub fn encode(tag: &str, content: &str) -> Result<String, FieldError> {
    if tag.len() != TAG_LENGTH {
        return Err(FieldError::InvalidTag {
            tag: tag.to_string(),
        });
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(FieldError::ContentTooLong {
            tag: tag.to_string(),
            length: content.len(),
            max: MAX_CONTENT_LENGTH,
        });
    }
    Ok(format!(
        "{}{:0width$}{}",
        tag,
        content.len(),
        content,
        width = LENGTH_DIGITS
    ))
}

/// A single decoded TLV record with its cached wire form
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FieldParts")
)]
pub struct Field {
    tag: String,
    content: String,
    raw: String,
}

impl Field {
    /// Build a field, computing its raw form
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Result<Self, FieldError> {
        let tag = tag.into();
        let content = content.into();
        let raw = encode(&tag, &content)?;
        Ok(Self { tag, content, raw })
    }

    /// Same tag, different content
    pub fn with_content(&self, content: impl Into<String>) -> Result<Self, FieldError> {
        Self::new(self.tag.clone(), content)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Full `tag + length + content` string, empty for an unset field
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this slot holds a decoded field
    pub fn is_set(&self) -> bool {
        !self.tag.is_empty()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Deserialization shape; `raw` is accepted but always recomputed
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct FieldParts {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    content: String,
}

#[cfg(feature = "serialization")]
impl TryFrom<FieldParts> for Field {
    type Error = FieldError;

    fn try_from(parts: FieldParts) -> Result<Self, Self::Error> {
        if parts.tag.is_empty() && parts.content.is_empty() {
            return Ok(Field::default());
        }
        Field::new(parts.tag, parts.content)
    }
}
