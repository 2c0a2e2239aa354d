//! CRC16-CCITT Checksum
//!
//! Polynomial `0x1021`, initial value `0xFFFF`, no reflection, no final
//! XOR, computed over the payload bytes. The checksum is rendered as four
//! uppercase hex digits and stored as the content of the CRC field; it
//! covers everything up to and including that field's `tag + "04"` header.

use types::PaymentRecord;

pub const CRC16_POLYNOMIAL: u16 = 0x1021;
pub const CRC16_INITIAL: u16 = 0xFFFF;

/// Calculate the CRC16-CCITT of a byte slice
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc = StreamingCrc16::new();
    crc.update(data);
    crc.finalize()
}

/// Checksum of a string as four uppercase hex digits
pub fn compute_checksum(input: &str) -> String {
    format_checksum(crc16_ccitt(input.as_bytes()))
}

pub fn format_checksum(crc: u16) -> String {
    format!("{:04X}", crc)
}

/// Checksum a record's serialized fields without building the string
pub fn record_checksum(record: &PaymentRecord, crc_tag: &str) -> String {
    let mut crc = StreamingCrc16::new();
    for field in record.checksummed_fields() {
        crc.update(field.raw().as_bytes());
    }
    crc.update(crc_tag.as_bytes());
    crc.update(types::CRC_CONTENT_LENGTH.as_bytes());
    format_checksum(crc.finalize())
}

/// Outcome of comparing a stored checksum against a recomputed one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumCheck {
    pub stored: String,
    pub calculated: String,
}

impl ChecksumCheck {
    pub fn new(stored: impl Into<String>, calculated: impl Into<String>) -> Self {
        Self {
            stored: stored.into(),
            calculated: calculated.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.stored == self.calculated
    }
}

/// Check a record's stored checksum against its own re-serialization
///
/// Only fields the record holds are covered, so a payload that carried
/// unrecognized tags will not verify this way; use
/// [`verify_payload_checksum`] on the original text instead.
pub fn verify_record_checksum(record: &PaymentRecord, crc_tag: &str) -> ChecksumCheck {
    let tag = if record.crc_code.is_set() {
        record.crc_code.tag()
    } else {
        crc_tag
    };
    ChecksumCheck::new(record.crc_code.content(), record_checksum(record, tag))
}

/// Check a payload whose last four characters are its checksum
///
/// Returns `None` when the payload is too short to carry a checksum.
pub fn verify_payload_checksum(payload: &str) -> Option<ChecksumCheck> {
    let split = payload.len().checked_sub(4)?;
    let (covered, stored) = (payload.get(..split)?, payload.get(split..)?);
    Some(ChecksumCheck::new(stored, compute_checksum(covered)))
}

/// Incremental CRC16-CCITT calculator
#[derive(Debug, Clone, Copy)]
pub struct StreamingCrc16 {
    crc: u16,
}

impl StreamingCrc16 {
    pub fn new() -> Self {
        Self { crc: CRC16_INITIAL }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= u16::from(byte) << 8;
            for _ in 0..8 {
                self.crc = if self.crc & 0x8000 != 0 {
                    (self.crc << 1) ^ CRC16_POLYNOMIAL
                } else {
                    self.crc << 1
                };
            }
        }
    }

    pub fn finalize(self) -> u16 {
        self.crc
    }

    pub fn reset(&mut self) {
        self.crc = CRC16_INITIAL;
    }
}

impl Default for StreamingCrc16 {
    fn default() -> Self {
        Self::new()
    }
}
