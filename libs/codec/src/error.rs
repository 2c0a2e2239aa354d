//! Protocol-level errors for QRIS payload processing
//!
//! Structural failures only: malformed TLV framing, malformed nested
//! composites and fields that cannot be encoded. Semantic problems (a
//! missing tag, an unknown category) are never errors; they are collected
//! as violations by the validator.

use thiserror::Error;
use types::FieldError;

/// What exactly was wrong with a TLV frame
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvFault {
    /// Not enough input left for a tag, a length and any content
    #[error("need at least {need} bytes for a field, {remaining} remain")]
    TooShort { need: usize, remaining: usize },

    /// Length prefix is not two decimal digits
    #[error("length prefix {found:?} is not two decimal digits")]
    NonNumericLength { found: String },

    /// Declared length runs past the end of the input
    #[error("declared length {declared} exceeds the {available} bytes available")]
    LengthExceedsInput { declared: usize, available: usize },

    /// A frame boundary falls inside a multi-byte character
    #[error("frame boundary at byte {position} splits a character")]
    SplitCharacter { position: usize },
}

/// TLV processing errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// Input does not follow the tag/length/content framing
    #[error("Malformed TLV at offset {offset}: {fault} (input: {input_size} bytes)")]
    MalformedTlv {
        offset: usize,
        fault: TlvFault,
        input_size: usize,
    },

    /// Nested TLV inside a composite tag is malformed
    #[error("Failed to parse composite tag {tag} (content: {content:?}): {source}")]
    CompositeParse {
        tag: String,
        content: String,
        source: Box<ProtocolError>,
    },

    /// A field could not be encoded
    #[error("Field encoding failed: {0}")]
    Field(#[from] FieldError),
}

impl ProtocolError {
    /// Create MalformedTlv error with framing context
    pub fn malformed_tlv(offset: usize, fault: TlvFault, input_size: usize) -> Self {
        Self::MalformedTlv {
            offset,
            fault,
            input_size,
        }
    }

    /// Wrap a nested decode failure with the composite that contained it
    pub fn composite_parse(
        tag: impl Into<String>,
        content: impl Into<String>,
        source: ProtocolError,
    ) -> Self {
        Self::CompositeParse {
            tag: tag.into(),
            content: content.into(),
            source: Box::new(source),
        }
    }

    /// The innermost framing fault, if any
    pub fn fault(&self) -> Option<&TlvFault> {
        match self {
            Self::MalformedTlv { fault, .. } => Some(fault),
            Self::CompositeParse { source, .. } => source.fault(),
            Self::Field(_) => None,
        }
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

/// Failures of the parse-validate-convert pipeline
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Payload decoded but is not a usable QRIS payload
    #[error("Payload failed validation: {}", .violations.join("; "))]
    Invalid { violations: Vec<String> },
}
