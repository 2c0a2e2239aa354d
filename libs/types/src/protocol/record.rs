//! # Payment Record - Structured QRIS Payload
//!
//! ## Purpose
//!
//! Holds one named slot per QRIS field the codec understands. Slots that the
//! payload did not carry stay at `Field::default()`. Tags outside the known
//! set are not stored; they survive only in the original payload text.
//!
//! ## Serialization Order
//!
//! ```text
//! version → category → acquirer → switching → merchant category code →
//! currency code → payment amount → payment fee category → payment fee →
//! country code → merchant name → merchant city → merchant postal code →
//! additional information → CRC code
//! ```
//!
//! The checksum covers every slot before the CRC code followed by the CRC
//! tag and its fixed `"04"` length.

use std::fmt;

use super::detail::{AcquirerDetail, AdditionalInformationDetail, Composite, SwitchingDetail};
use super::field::Field;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Every QRIS checksum is four uppercase hex digits
pub const CRC_CONTENT_LENGTH: &str = "04";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PaymentRecord {
    pub version: Field,
    pub category: Field,
    pub acquirer: Composite<AcquirerDetail>,
    pub switching: Composite<SwitchingDetail>,
    pub merchant_category_code: Field,
    pub currency_code: Field,
    pub payment_amount: Field,
    pub payment_fee_category: Field,
    pub payment_fee: Field,
    pub country_code: Field,
    pub merchant_name: Field,
    pub merchant_city: Field,
    pub merchant_postal_code: Field,
    pub additional_information: Composite<AdditionalInformationDetail>,
    pub crc_code: Field,
}

impl PaymentRecord {
    /// Slots covered by the checksum, in serialization order
    pub fn checksummed_fields(&self) -> [&Field; 14] {
        [
            &self.version,
            &self.category,
            &self.acquirer.field,
            &self.switching.field,
            &self.merchant_category_code,
            &self.currency_code,
            &self.payment_amount,
            &self.payment_fee_category,
            &self.payment_fee,
            &self.country_code,
            &self.merchant_name,
            &self.merchant_city,
            &self.merchant_postal_code,
            &self.additional_information.field,
        ]
    }

    /// Concatenated raw form of every slot before the CRC code
    pub fn payload_body(&self) -> String {
        self.checksummed_fields()
            .iter()
            .map(|field| field.raw())
            .collect()
    }

    /// Text the checksum is computed over: body, CRC tag and `"04"`
    pub fn checksum_input(&self, crc_tag: &str) -> String {
        let mut input = self.payload_body();
        input.push_str(crc_tag);
        input.push_str(CRC_CONTENT_LENGTH);
        input
    }

    /// Full payload string including the CRC code
    pub fn to_payload_string(&self) -> String {
        let mut payload = self.payload_body();
        payload.push_str(self.crc_code.raw());
        payload
    }
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.checksummed_fields() {
            f.write_str(field.raw())?;
        }
        f.write_str(self.crc_code.raw())
    }
}
