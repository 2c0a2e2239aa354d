//! # QRIS Codec
//!
//! ## Purpose
//!
//! The rules layer for QRIS payment payloads:
//! - TLV framing (decode and encode)
//! - tag classification against a configurable registry
//! - composite detail parsing (acquirer, switching, additional information)
//! - structural validation and CRC16-CCITT checksums
//! - static to dynamic payload conversion
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → tools/qris
//!     ↑           ↓
//! Pure Data   Decode/Validate/Convert
//! Structures  against libs/config Registry
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use codec::{DynamicRequest, Qris};
//!
//! let qris = Qris::default();
//! let parsed = qris.parse("000201010211").unwrap();
//! assert_eq!(parsed.record.category.content(), "11");
//! assert!(!parsed.is_valid());
//!
//! let dynamic = qris
//!     .to_dynamic_with(&parsed.record, &DynamicRequest::new(15000))
//!     .unwrap();
//! assert_eq!(dynamic.payment_amount.raw(), "540515000");
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - QR image rendering or scanning
//! - Payment settlement or network calls
//! - Raw data structure definitions (belongs in libs/types)

pub mod builder;
pub mod composite;
pub mod dispatcher;
pub mod error;
pub mod parser;
pub mod qris;
pub mod tlv_types;
pub mod validation;

pub use builder::{to_dynamic, DynamicRequest};
pub use composite::{parse_composite, parse_detail, CompositeDetail};
pub use error::{ConvertError, ProtocolError, ProtocolResult, TlvFault};
pub use parser::{
    decode, decode_all, decode_into, encode, sanitize_payload, RawTlv, TlvReader, HEADER_LENGTH,
    MIN_FRAME_LENGTH,
};
pub use qris::{ParsedPayment, Qris};
pub use tlv_types::{AcquirerTag, AdditionalInformationTag, SwitchingTag, TopLevelTag};
pub use validation::{
    compute_checksum, crc16_ccitt, record_checksum, verify_payload_checksum,
    verify_record_checksum, ChecksumCheck, RecordValidator, StreamingCrc16, Violation,
};

pub use qris_config::Registry;
pub use types::{FeeCategory, Field, PaymentRecord};
