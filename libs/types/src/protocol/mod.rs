//! Protocol layer: the QRIS payload data model
//!
//! Fields, composite details and the payment record. Decoding, validation
//! and checksum rules live in the codec crate.

pub mod category;
pub mod detail;
pub mod field;
pub mod record;

pub use category::{FeeCategory, PayloadCategory, UnknownFeeCategory};
pub use detail::{AcquirerDetail, AdditionalInformationDetail, Composite, SwitchingDetail};
pub use field::{encode, Field, LENGTH_DIGITS, MAX_CONTENT_LENGTH, TAG_LENGTH};
pub use record::{PaymentRecord, CRC_CONTENT_LENGTH};
