//! # QRIS Payload Service
//!
//! ## Purpose
//!
//! Single entry point tying the pieces together: decode a payload string
//! into a [`PaymentRecord`], report what is wrong with it, re-encode it, and
//! rewrite a static payload into a dynamic one.
//!
//! ## Architecture
//!
//! ```text
//! raw payload ─► decode_into ─► dispatcher::assign ─► PaymentRecord
//!                     │                                    │
//!                     └─ crc content offset          RecordValidator
//!                                 │                        │
//!                     CRC16(raw[..crc content]) ─► violations (checksum last)
//! ```
//!
//! Parsing only fails for structural problems. A payload that decodes but
//! misses tags or carries a wrong checksum comes back as a record together
//! with its violation list.

use std::sync::Arc;

use qris_config::Registry;
use serde::Serialize;
use tracing::{debug, warn};
use types::PaymentRecord;

use crate::builder::{self, DynamicRequest};
use crate::dispatcher;
use crate::error::{ConvertError, ProtocolResult};
use crate::parser::decode_into;
use crate::validation::checksum::{compute_checksum, verify_record_checksum, ChecksumCheck};
use crate::validation::validator::{RecordValidator, Violation};

/// A decoded payload and every rule it breaks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPayment {
    pub record: PaymentRecord,
    pub violations: Vec<String>,
}

impl ParsedPayment {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Decode state: the record plus where the CRC frame's content starts
#[derive(Default)]
struct ParseState {
    record: PaymentRecord,
    crc_content_offset: Option<usize>,
}

/// QRIS payload service bound to one tag registry
#[derive(Debug, Clone)]
pub struct Qris {
    registry: Arc<Registry>,
}

impl Default for Qris {
    fn default() -> Self {
        Self::new(Registry::qris())
    }
}

impl Qris {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode a payload string and validate the result
    ///
    /// The checksum is recomputed over the payload text itself, up to and
    /// including the CRC field's header, so unrecognized tags in the payload
    /// are still covered.
    pub fn parse(&self, raw: &str) -> ProtocolResult<ParsedPayment> {
        let tags = &self.registry.tags;
        let mut state = ParseState::default();

        decode_into(raw, &mut state, |state, tlv| {
            if tlv.tag == tags.crc_code {
                state.crc_content_offset = Some(tlv.content_offset());
            }
            dispatcher::assign(&mut state.record, tlv.to_field()?, tags)
        })
        .map_err(|err| {
            debug!("Payload decode failed: {}", err);
            err
        })?;

        let validator = RecordValidator::new(&self.registry);
        let mut violations = validator.violations(&state.record);

        if let Some(offset) = state.crc_content_offset {
            let covered = &raw[..offset];
            let check = ChecksumCheck::new(state.record.crc_code.content(), compute_checksum(covered));
            if !check.is_valid() {
                violations.push(Violation::ChecksumMismatch {
                    stored: check.stored,
                    calculated: check.calculated,
                });
            }
        }

        let violations: Vec<String> = violations.iter().map(ToString::to_string).collect();
        if !violations.is_empty() {
            warn!(
                "Payload has {} violation(s): {}",
                violations.len(),
                violations.join("; ")
            );
        }

        Ok(ParsedPayment {
            record: state.record,
            violations,
        })
    }

    /// Structural rules only; the checksum is not compared
    pub fn validate(&self, record: &PaymentRecord) -> Vec<String> {
        RecordValidator::new(&self.registry).validate(record)
    }

    /// Compare a record's stored checksum with its own re-serialization
    pub fn verify_checksum(&self, record: &PaymentRecord) -> ChecksumCheck {
        verify_record_checksum(record, &self.registry.tags.crc_code)
    }

    /// Convert a static record into a dynamic one
    ///
    /// `fee_category` is matched exactly against `FIXED` and `PERCENT`; any
    /// other label, or a zero fee, produces a payload without fee fields.
    pub fn to_dynamic(
        &self,
        record: &PaymentRecord,
        merchant_city: &str,
        merchant_postal_code: &str,
        amount: u32,
        fee_category: &str,
        fee: u32,
    ) -> ProtocolResult<PaymentRecord> {
        let request = DynamicRequest::new(amount)
            .with_merchant_city(merchant_city)
            .with_merchant_postal_code(merchant_postal_code)
            .with_fee_label(fee_category, fee);
        self.to_dynamic_with(record, &request)
    }

    pub fn to_dynamic_with(
        &self,
        record: &PaymentRecord,
        request: &DynamicRequest,
    ) -> ProtocolResult<PaymentRecord> {
        builder::to_dynamic(record, request, &self.registry)
    }

    /// Wire form of a record
    pub fn to_payload_string(&self, record: &PaymentRecord) -> String {
        record.to_payload_string()
    }

    /// Parse, require a valid payload, convert and serialize in one step
    pub fn convert(&self, raw: &str, request: &DynamicRequest) -> Result<String, ConvertError> {
        let parsed = self.parse(raw)?;
        if !parsed.is_valid() {
            return Err(ConvertError::Invalid {
                violations: parsed.violations,
            });
        }
        let dynamic = self.to_dynamic_with(&parsed.record, request)?;
        Ok(dynamic.to_payload_string())
    }
}
