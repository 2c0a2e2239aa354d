//! # Dynamic Payload Builder
//!
//! ## Purpose
//!
//! Turns a parsed static payment record into a dynamic one: a payload that
//! carries its own amount (and optionally a convenience fee), ready to be
//! rendered and scanned for a single transaction.
//!
//! ## Rewritten Slots
//!
//! ```text
//! merchant city         ← request city, when given
//! merchant postal code  ← request postal code, when given
//! category              ← dynamic marker
//! payment amount        ← request amount
//! payment fee category  ← fixed/percent marker, only with a fee > 0
//! payment fee           ← fee under the fixed or percent tag
//! crc code              ← CRC16 over every slot before it + tag + "04"
//! ```
//!
//! Every other slot (acquirer, switching, merchant name, additional
//! information...) is copied through untouched. A rewritten slot keeps the
//! tag it had in the source record; when the source never carried that slot
//! the registry tag is used.

use qris_config::Registry;
use tracing::debug;
use types::{FeeCategory, Field, PayloadCategory, PaymentRecord};

use crate::error::ProtocolResult;
use crate::validation::checksum::record_checksum;

/// Parameters of a static-to-dynamic conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRequest {
    /// Replacement merchant city; empty keeps the original
    pub merchant_city: String,
    /// Replacement postal code; empty keeps the original
    pub merchant_postal_code: String,
    pub amount: u32,
    pub fee_category: Option<FeeCategory>,
    pub fee: u32,
}

impl DynamicRequest {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    pub fn with_merchant_city(mut self, city: impl Into<String>) -> Self {
        self.merchant_city = city.into();
        self
    }

    pub fn with_merchant_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.merchant_postal_code = postal_code.into();
        self
    }

    pub fn with_fee(mut self, category: FeeCategory, fee: u32) -> Self {
        self.fee_category = Some(category);
        self.fee = fee;
        self
    }

    /// Fee from a request label; anything but `FIXED`/`PERCENT` means no fee
    pub fn with_fee_label(mut self, label: &str, fee: u32) -> Self {
        self.fee_category = FeeCategory::from_label(label);
        self.fee = fee;
        self
    }

    /// Fee category to emit, if the fee applies at all
    fn applied_fee(&self) -> Option<FeeCategory> {
        self.fee_category.filter(|_| self.fee > 0)
    }
}

/// Build the dynamic variant of a static record
pub fn to_dynamic(
    record: &PaymentRecord,
    request: &DynamicRequest,
    registry: &Registry,
) -> ProtocolResult<PaymentRecord> {
    let tags = &registry.tags;
    let contents = &registry.contents;
    let mut dynamic = record.clone();

    if !request.merchant_city.is_empty() {
        dynamic.merchant_city = rewrite(
            &record.merchant_city,
            &tags.merchant_city,
            &request.merchant_city,
        )?;
    }
    if !request.merchant_postal_code.is_empty() {
        dynamic.merchant_postal_code = rewrite(
            &record.merchant_postal_code,
            &tags.merchant_postal_code,
            &request.merchant_postal_code,
        )?;
    }

    dynamic.category = rewrite(
        &record.category,
        &tags.category,
        contents.category_marker(PayloadCategory::Dynamic),
    )?;
    dynamic.payment_amount = Field::new(tags.payment_amount.as_str(), request.amount.to_string())?;

    match request.applied_fee() {
        Some(category) => {
            let fee_tag = match category {
                FeeCategory::Fixed => &tags.payment_fee_fixed,
                FeeCategory::Percent => &tags.payment_fee_percent,
            };
            dynamic.payment_fee_category = Field::new(
                tags.payment_fee_category.as_str(),
                contents.fee_marker(category),
            )?;
            dynamic.payment_fee = Field::new(fee_tag.as_str(), request.fee.to_string())?;
        }
        None => {
            dynamic.payment_fee_category = Field::default();
            dynamic.payment_fee = Field::default();
        }
    }

    let crc_tag = if record.crc_code.is_set() {
        record.crc_code.tag()
    } else {
        tags.crc_code.as_str()
    };
    let checksum = record_checksum(&dynamic, crc_tag);
    dynamic.crc_code = Field::new(crc_tag, checksum)?;

    debug!(
        "Converted payload to dynamic: amount={} fee={:?} crc={}",
        request.amount,
        request.applied_fee(),
        dynamic.crc_code.content()
    );

    Ok(dynamic)
}

/// Replace a slot's content, keeping its tag when it has one
fn rewrite(existing: &Field, fallback_tag: &str, content: &str) -> ProtocolResult<Field> {
    let field = if existing.is_set() {
        existing.with_content(content)?
    } else {
        Field::new(fallback_tag, content)?
    };
    Ok(field)
}
