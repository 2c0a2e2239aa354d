//! # Field Dispatcher
//!
//! Places a decoded top-level field into its [`PaymentRecord`] slot.
//!
//! - simple tags are stored as-is
//! - acquirer and bank-transfer acquirer share the acquirer slot; the
//!   field's own tag records which one was used
//! - fixed and percent fee tags share the payment fee slot
//! - composite tags are decoded into their detail, and a malformed nested
//!   sequence is wrapped with the outer tag and content
//! - unknown tags are skipped

use qris_config::TagRegistry;
use tracing::trace;
use types::{
    AcquirerDetail, AdditionalInformationDetail, Composite, Field, PaymentRecord, SwitchingDetail,
};

use crate::composite::{parse_composite, CompositeDetail};
use crate::error::{ProtocolError, ProtocolResult};
use crate::tlv_types::TopLevelTag;

/// Assign one top-level field to the record
pub fn assign(record: &mut PaymentRecord, field: Field, tags: &TagRegistry) -> ProtocolResult<()> {
    match TopLevelTag::classify(field.tag(), tags) {
        TopLevelTag::Version => record.version = field,
        TopLevelTag::Category => record.category = field,
        TopLevelTag::Acquirer | TopLevelTag::AcquirerBankTransfer => {
            record.acquirer = composite::<AcquirerDetail>(field, tags)?
        }
        TopLevelTag::Switching => record.switching = composite::<SwitchingDetail>(field, tags)?,
        TopLevelTag::MerchantCategoryCode => record.merchant_category_code = field,
        TopLevelTag::CurrencyCode => record.currency_code = field,
        TopLevelTag::PaymentAmount => record.payment_amount = field,
        TopLevelTag::PaymentFeeCategory => record.payment_fee_category = field,
        TopLevelTag::PaymentFeeFixed | TopLevelTag::PaymentFeePercent => {
            record.payment_fee = field
        }
        TopLevelTag::CountryCode => record.country_code = field,
        TopLevelTag::MerchantName => record.merchant_name = field,
        TopLevelTag::MerchantCity => record.merchant_city = field,
        TopLevelTag::MerchantPostalCode => record.merchant_postal_code = field,
        TopLevelTag::AdditionalInformation => {
            record.additional_information =
                composite::<AdditionalInformationDetail>(field, tags)?
        }
        TopLevelTag::CrcCode => record.crc_code = field,
        TopLevelTag::Unknown => trace!("Ignoring unrecognized tag {}", field.tag()),
    }
    Ok(())
}

fn composite<D: CompositeDetail>(
    field: Field,
    tags: &TagRegistry,
) -> ProtocolResult<Composite<D>> {
    let (tag, content) = (field.tag().to_string(), field.content().to_string());
    parse_composite(field, tags).map_err(|err| ProtocolError::composite_parse(tag, content, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign_all(fields: &[(&str, &str)]) -> ProtocolResult<PaymentRecord> {
        let tags = TagRegistry::default();
        let mut record = PaymentRecord::default();
        for (tag, content) in fields {
            assign(&mut record, Field::new(*tag, *content).unwrap(), &tags)?;
        }
        Ok(record)
    }

    #[test]
    fn test_simple_tags_land_in_slots() {
        let record = assign_all(&[("00", "01"), ("53", "360"), ("60", "Jakarta")]).unwrap();
        assert_eq!(record.version.raw(), "000201");
        assert_eq!(record.currency_code.content(), "360");
        assert_eq!(record.merchant_city.content(), "Jakarta");
    }

    #[test]
    fn test_bank_transfer_acquirer_uses_acquirer_slot() {
        let record = assign_all(&[("40", "0003ABC0103123")]).unwrap();
        assert_eq!(record.acquirer.tag(), "40");
        assert_eq!(record.acquirer.detail.site.content(), "ABC");
        assert_eq!(record.acquirer.detail.mpan.content(), "123");
    }

    #[test]
    fn test_both_fee_tags_use_fee_slot() {
        let fixed = assign_all(&[("56", "666")]).unwrap();
        assert_eq!(fixed.payment_fee.raw(), "5603666");

        let percent = assign_all(&[("57", "5")]).unwrap();
        assert_eq!(percent.payment_fee.raw(), "57015");
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let record = assign_all(&[("27", "0010A000000677"), ("99", "x")]).unwrap();
        assert_eq!(record, PaymentRecord::default());
    }

    #[test]
    fn test_malformed_composite_is_wrapped() {
        let err = assign_all(&[("51", "0014ID.CO")]).unwrap_err();
        match err {
            ProtocolError::CompositeParse { tag, content, .. } => {
                assert_eq!(tag, "51");
                assert_eq!(content, "0014ID.CO");
            }
            other => panic!("expected composite error, got {other:?}"),
        }
    }
}
