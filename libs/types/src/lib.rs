//! # QRIS Types Library
//!
//! Data model for QRIS payment payloads.
//!
//! ## Design Philosophy
//!
//! - **Cached Wire Form**: every [`Field`] carries its `tag + length + content`
//!   string, built once through the encode rule and never edited in place
//! - **Fixed Shape**: a [`PaymentRecord`] has one slot per known field;
//!   unset slots are the zero-value field and serialize as nothing
//! - **No Parsing Here**: decoding, dispatch, validation and checksums belong
//!   to the codec crate
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Field, PaymentRecord};
//!
//! let record = PaymentRecord {
//!     version: Field::new("00", "01").unwrap(),
//!     merchant_city: Field::new("60", "Kota Yogyakarta").unwrap(),
//!     ..Default::default()
//! };
//! assert_eq!(record.to_payload_string(), "0002016015Kota Yogyakarta");
//! ```
//!
//! ## Integration Points
//!
//! ```text
//! libs/types → libs/codec → tools/qris
//!     ↑            ↓            ↓
//! Pure Data   Decode/Validate  CLI
//! Structures  Checksum/Convert JSON view
//! ```

pub mod common;
pub mod protocol;

pub use common::errors::FieldError;
pub use protocol::{
    encode, AcquirerDetail, AdditionalInformationDetail, Composite, FeeCategory, Field,
    PayloadCategory, PaymentRecord, SwitchingDetail, UnknownFeeCategory, CRC_CONTENT_LENGTH,
    LENGTH_DIGITS, MAX_CONTENT_LENGTH, TAG_LENGTH,
};
