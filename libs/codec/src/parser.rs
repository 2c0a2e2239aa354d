//! # TLV Parser - QRIS Field Framing
//!
//! ## Purpose
//!
//! Splits a QRIS payload (or the content of a composite field) into its
//! `tag + length + content` frames. The parser knows nothing about tag
//! meanings: every frame is yielded, including tags nobody recognizes.
//!
//! ## Frame Rules
//!
//! ```text
//! offset ─► ┌────┬────┬───────────────┐
//!           │ TT │ LL │ content (LL)  │ ─► next frame at offset + 4 + LL
//!           └────┴────┴───────────────┘
//! ```
//!
//! A frame is rejected when fewer than [`MIN_FRAME_LENGTH`] bytes remain,
//! when `LL` is not two decimal digits, or when `LL` runs past the end of
//! the input. Offsets and lengths are byte counts; a frame that would split
//! a multi-byte character is rejected as well.
//!
//! Every accepted frame consumes at least four bytes, so decoding an input
//! of `n` bytes finishes in at most `n / 4` steps.

use std::iter::FusedIterator;

use types::{Field, LENGTH_DIGITS, TAG_LENGTH};

use crate::error::{ProtocolError, ProtocolResult, TlvFault};

/// Tag plus length prefix
pub const HEADER_LENGTH: usize = TAG_LENGTH + LENGTH_DIGITS;

/// Shortest input the parser will attempt to read a frame from
pub const MIN_FRAME_LENGTH: usize = HEADER_LENGTH + 1;

/// One decoded frame borrowing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTlv<'a> {
    pub tag: &'a str,
    pub content: &'a str,
    /// Byte offset of the tag within the decoded input
    pub offset: usize,
}

impl<'a> RawTlv<'a> {
    /// Offset of the first byte after the frame header
    pub fn content_offset(&self) -> usize {
        self.offset + HEADER_LENGTH
    }

    pub fn to_field(&self) -> ProtocolResult<Field> {
        Ok(Field::new(self.tag, self.content)?)
    }
}

/// Lazy frame iterator over a TLV string
///
/// Cloning the reader restarts nothing; it forks the cursor. Call
/// [`decode`] again to start over. After the first error the reader is
/// exhausted.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> TlvReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            failed: false,
        }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn fail(&mut self, fault: TlvFault) -> Option<ProtocolResult<RawTlv<'a>>> {
        self.failed = true;
        Some(Err(ProtocolError::malformed_tlv(
            self.offset,
            fault,
            self.input.len(),
        )))
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = ProtocolResult<RawTlv<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }

        let remaining = self.remaining();
        if remaining.len() < MIN_FRAME_LENGTH {
            return self.fail(TlvFault::TooShort {
                need: MIN_FRAME_LENGTH,
                remaining: remaining.len(),
            });
        }

        let bytes = remaining.as_bytes();
        let (high, low) = (bytes[2], bytes[3]);
        if !high.is_ascii_digit() || !low.is_ascii_digit() {
            let found = String::from_utf8_lossy(&bytes[2..4]).into_owned();
            return self.fail(TlvFault::NonNumericLength { found });
        }
        let length = usize::from(high - b'0') * 10 + usize::from(low - b'0');

        let available = remaining.len() - HEADER_LENGTH;
        if length > available {
            return self.fail(TlvFault::LengthExceedsInput {
                declared: length,
                available,
            });
        }

        let frame_end = HEADER_LENGTH + length;
        let (tag, content) = match (remaining.get(..2), remaining.get(HEADER_LENGTH..frame_end)) {
            (Some(tag), Some(content)) => (tag, content),
            (None, _) => {
                return self.fail(TlvFault::SplitCharacter {
                    position: self.offset + 2,
                })
            }
            (_, None) => {
                return self.fail(TlvFault::SplitCharacter {
                    position: self.offset + frame_end,
                })
            }
        };

        let tlv = RawTlv {
            tag,
            content,
            offset: self.offset,
        };
        self.offset += frame_end;
        Some(Ok(tlv))
    }
}

impl FusedIterator for TlvReader<'_> {}

/// Decode a TLV string lazily
pub fn decode(input: &str) -> TlvReader<'_> {
    TlvReader::new(input)
}

/// Decode a TLV string completely, failing on the first malformed frame
pub fn decode_all(input: &str) -> ProtocolResult<Vec<RawTlv<'_>>> {
    decode(input).collect()
}

/// Fold every frame of `input` into `state`
///
/// The single framing loop shared by the top-level payload and every
/// composite detail; `assign` decides where each frame lands.
pub fn decode_into<S, F>(input: &str, state: &mut S, mut assign: F) -> ProtocolResult<()>
where
    F: FnMut(&mut S, RawTlv<'_>) -> ProtocolResult<()>,
{
    for tlv in decode(input) {
        assign(state, tlv?)?;
    }
    Ok(())
}

/// Encode a tag and content into `tag + LL + content`
pub fn encode(tag: &str, content: &str) -> ProtocolResult<String> {
    Ok(types::encode(tag, content)?)
}

/// Strip line breaks and surrounding whitespace from pasted payloads
pub fn sanitize_payload(input: &str) -> String {
    let joined: String = input.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    joined.trim().to_string()
}
