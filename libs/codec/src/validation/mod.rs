//! # Payment Record Validation
//!
//! ## Purpose
//!
//! Semantic checks on a structurally decoded payload. Violations are
//! collected, never raised: a record with missing tags or a bad checksum is
//! still a well-formed record, and the caller decides whether to reject it.
//!
//! ## Architecture
//!
//! ```text
//! PaymentRecord → RecordValidator → Vec<Violation>
//!       ↓                                 ↓
//!   payload text → checksum check → ChecksumMismatch (appended last)
//! ```

pub mod checksum;
pub mod validator;

pub use checksum::{
    compute_checksum, crc16_ccitt, record_checksum, verify_payload_checksum,
    verify_record_checksum, ChecksumCheck, StreamingCrc16,
};
pub use validator::{RecordValidator, Violation};
