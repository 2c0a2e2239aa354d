//! Additional data field template
//!
//! Besides the named slots, two numeric ranges are collected: reserved for
//! future use and payment system specific. Each range has a single slot, so
//! the last matching tag wins.

use qris_config::TagRegistry;
use types::{AdditionalInformationDetail, Field};

use super::CompositeDetail;
use crate::tlv_types::AdditionalInformationTag;

impl CompositeDetail for AdditionalInformationDetail {
    const NAME: &'static str = "additional information";

    fn assign(&mut self, tags: &TagRegistry, field: Field) -> bool {
        use AdditionalInformationTag as Tag;

        let slot = match Tag::classify(field.tag(), tags) {
            Tag::BillNumber => &mut self.bill_number,
            Tag::MobileNumber => &mut self.mobile_number,
            Tag::StoreLabel => &mut self.store_label,
            Tag::LoyaltyNumber => &mut self.loyalty_number,
            Tag::ReferenceLabel => &mut self.reference_label,
            Tag::CustomerLabel => &mut self.customer_label,
            Tag::TerminalLabel => &mut self.terminal_label,
            Tag::PurposeOfTransaction => &mut self.purpose_of_transaction,
            Tag::AdditionalConsumerDataRequest => &mut self.additional_consumer_data_request,
            Tag::MerchantTaxId => &mut self.merchant_tax_id,
            Tag::MerchantChannel => &mut self.merchant_channel,
            Tag::Rfu => &mut self.rfu,
            Tag::PaymentSystemSpecific => &mut self.payment_system_specific,
            Tag::Unknown => return false,
        };
        *slot = field;
        true
    }
}
