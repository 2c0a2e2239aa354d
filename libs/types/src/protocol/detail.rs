//! Composite fields and their fixed-shape details
//!
//! Acquirer, switching and additional information carry a nested TLV
//! sequence as their content. The outer [`Field`] is kept verbatim next to
//! the decoded [`Composite::detail`] so that a payload can be re-emitted
//! byte for byte.

use std::fmt;

use super::field::Field;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A field whose content is itself a TLV sequence
///
/// In the JSON view `detail` is output only: deserializing keeps the outer
/// field and leaves the detail at its default, so the two can never
/// disagree. Decode the field's content again to rebuild the detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Composite<D> {
    pub field: Field,
    #[cfg_attr(feature = "serialization", serde(skip_deserializing))]
    pub detail: D,
}

impl<D> Composite<D> {
    pub fn new(field: Field, detail: D) -> Self {
        Self { field, detail }
    }

    pub fn tag(&self) -> &str {
        self.field.tag()
    }

    pub fn content(&self) -> &str {
        self.field.content()
    }

    pub fn raw(&self) -> &str {
        self.field.raw()
    }

    pub fn is_set(&self) -> bool {
        self.field.is_set()
    }
}

/// Merchant account information published by the acquirer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AcquirerDetail {
    /// Globally unique identifier of the acquirer (reverse domain)
    pub site: Field,
    /// Merchant primary account number
    pub mpan: Field,
    pub terminal_id: Field,
    /// Merchant criteria (UMI, UKE, UME, UBE...)
    pub category: Field,
}

/// Merchant account information published by the national switch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SwitchingDetail {
    pub site: Field,
    /// National merchant identifier
    pub nmid: Field,
    pub category: Field,
}

/// Additional data field template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AdditionalInformationDetail {
    pub bill_number: Field,
    pub mobile_number: Field,
    pub store_label: Field,
    pub loyalty_number: Field,
    pub reference_label: Field,
    pub customer_label: Field,
    pub terminal_label: Field,
    pub purpose_of_transaction: Field,
    pub additional_consumer_data_request: Field,
    pub merchant_tax_id: Field,
    pub merchant_channel: Field,
    /// Last tag seen in the reserved-for-future-use range
    pub rfu: Field,
    /// Last tag seen in the payment system specific range
    pub payment_system_specific: Field,
}

impl AdditionalInformationDetail {
    /// Slots in serialization order
    pub fn fields(&self) -> [&Field; 13] {
        [
            &self.bill_number,
            &self.mobile_number,
            &self.store_label,
            &self.loyalty_number,
            &self.reference_label,
            &self.customer_label,
            &self.terminal_label,
            &self.purpose_of_transaction,
            &self.additional_consumer_data_request,
            &self.merchant_tax_id,
            &self.merchant_channel,
            &self.rfu,
            &self.payment_system_specific,
        ]
    }

    /// Concatenate every slot's raw form in declaration order
    ///
    /// Unset slots contribute nothing. This is not a TLV re-encode: the
    /// result depends only on which slots hold a field, never on the order
    /// the nested tags arrived in.
    pub fn to_payload_string(&self) -> String {
        self.fields().iter().map(|field| field.raw()).collect()
    }
}

impl fmt::Display for AdditionalInformationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            f.write_str(field.raw())?;
        }
        Ok(())
    }
}
