//! # Tag Kinds - Closed Classification of QRIS Tags
//!
//! ## Purpose
//!
//! Turns a raw two-character tag into the slot it belongs to, using the
//! configured [`TagRegistry`]. Each level (top-level, acquirer, switching,
//! additional information) has its own closed enum with an explicit
//! `Unknown` arm, so dispatch is an exhaustive `match` and unrecognized
//! vendor tags fall through without being errors.
//!
//! Additional information also classifies by numeric range: named slots are
//! checked first, then the RFU range, then the payment system specific
//! range.

use qris_config::TagRegistry;

/// Top-level payload tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevelTag {
    Version,
    Category,
    Acquirer,
    AcquirerBankTransfer,
    Switching,
    MerchantCategoryCode,
    CurrencyCode,
    PaymentAmount,
    PaymentFeeCategory,
    PaymentFeeFixed,
    PaymentFeePercent,
    CountryCode,
    MerchantName,
    MerchantCity,
    MerchantPostalCode,
    AdditionalInformation,
    CrcCode,
    Unknown,
}

impl TopLevelTag {
    pub fn classify(tag: &str, tags: &TagRegistry) -> Self {
        match tag {
            t if t == tags.version => Self::Version,
            t if t == tags.category => Self::Category,
            t if t == tags.acquirer => Self::Acquirer,
            t if t == tags.acquirer_bank_transfer => Self::AcquirerBankTransfer,
            t if t == tags.switching => Self::Switching,
            t if t == tags.merchant_category_code => Self::MerchantCategoryCode,
            t if t == tags.currency_code => Self::CurrencyCode,
            t if t == tags.payment_amount => Self::PaymentAmount,
            t if t == tags.payment_fee_category => Self::PaymentFeeCategory,
            t if t == tags.payment_fee_fixed => Self::PaymentFeeFixed,
            t if t == tags.payment_fee_percent => Self::PaymentFeePercent,
            t if t == tags.country_code => Self::CountryCode,
            t if t == tags.merchant_name => Self::MerchantName,
            t if t == tags.merchant_city => Self::MerchantCity,
            t if t == tags.merchant_postal_code => Self::MerchantPostalCode,
            t if t == tags.additional_information => Self::AdditionalInformation,
            t if t == tags.crc_code => Self::CrcCode,
            _ => Self::Unknown,
        }
    }
}

/// Tags nested inside the acquirer template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquirerTag {
    Site,
    Mpan,
    TerminalId,
    Category,
    Unknown,
}

impl AcquirerTag {
    pub fn classify(tag: &str, tags: &TagRegistry) -> Self {
        let a = &tags.acquirer_detail;
        match tag {
            t if t == a.site => Self::Site,
            t if t == a.mpan => Self::Mpan,
            t if t == a.terminal_id => Self::TerminalId,
            t if t == a.category => Self::Category,
            _ => Self::Unknown,
        }
    }
}

/// Tags nested inside the switching template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchingTag {
    Site,
    Nmid,
    Category,
    Unknown,
}

impl SwitchingTag {
    pub fn classify(tag: &str, tags: &TagRegistry) -> Self {
        let s = &tags.switching_detail;
        match tag {
            t if t == s.site => Self::Site,
            t if t == s.nmid => Self::Nmid,
            t if t == s.category => Self::Category,
            _ => Self::Unknown,
        }
    }
}

/// Tags nested inside the additional data template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalInformationTag {
    BillNumber,
    MobileNumber,
    StoreLabel,
    LoyaltyNumber,
    ReferenceLabel,
    CustomerLabel,
    TerminalLabel,
    PurposeOfTransaction,
    AdditionalConsumerDataRequest,
    MerchantTaxId,
    MerchantChannel,
    Rfu,
    PaymentSystemSpecific,
    Unknown,
}

impl AdditionalInformationTag {
    pub fn classify(tag: &str, tags: &TagRegistry) -> Self {
        let ai = &tags.additional_information_detail;
        match tag {
            t if t == ai.bill_number => Self::BillNumber,
            t if t == ai.mobile_number => Self::MobileNumber,
            t if t == ai.store_label => Self::StoreLabel,
            t if t == ai.loyalty_number => Self::LoyaltyNumber,
            t if t == ai.reference_label => Self::ReferenceLabel,
            t if t == ai.customer_label => Self::CustomerLabel,
            t if t == ai.terminal_label => Self::TerminalLabel,
            t if t == ai.purpose_of_transaction => Self::PurposeOfTransaction,
            t if t == ai.additional_consumer_data_request => Self::AdditionalConsumerDataRequest,
            t if t == ai.merchant_tax_id => Self::MerchantTaxId,
            t if t == ai.merchant_channel => Self::MerchantChannel,
            t if ai.rfu.contains(t) => Self::Rfu,
            t if ai.payment_system_specific.contains(t) => Self::PaymentSystemSpecific,
            _ => Self::Unknown,
        }
    }
}
