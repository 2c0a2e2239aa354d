//! QRIS protocol constants
//!
//! Tag codes and content markers defined by the QRIS scheme. The registry
//! defaults are built from these; deployments may override them through
//! configuration.

/// Top-level tags
pub mod tags {
    pub const VERSION: &str = "00";
    pub const CATEGORY: &str = "01";
    pub const ACQUIRER: &str = "26";
    /// Acquirer published for bank transfer; switching is then optional
    pub const ACQUIRER_BANK_TRANSFER: &str = "40";
    pub const SWITCHING: &str = "51";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const CURRENCY_CODE: &str = "53";
    pub const PAYMENT_AMOUNT: &str = "54";
    pub const PAYMENT_FEE_CATEGORY: &str = "55";
    pub const PAYMENT_FEE_FIXED: &str = "56";
    pub const PAYMENT_FEE_PERCENT: &str = "57";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const MERCHANT_POSTAL_CODE: &str = "61";
    pub const ADDITIONAL_INFORMATION: &str = "62";
    pub const CRC_CODE: &str = "63";
}

/// Tags nested inside the acquirer template
pub mod acquirer {
    pub const SITE: &str = "00";
    pub const MPAN: &str = "01";
    pub const TERMINAL_ID: &str = "02";
    pub const CATEGORY: &str = "03";
}

/// Tags nested inside the switching template
pub mod switching {
    pub const SITE: &str = "00";
    pub const NMID: &str = "02";
    pub const CATEGORY: &str = "03";
}

/// Tags nested inside the additional data template
pub mod additional_information {
    pub const BILL_NUMBER: &str = "01";
    pub const MOBILE_NUMBER: &str = "02";
    pub const STORE_LABEL: &str = "03";
    pub const LOYALTY_NUMBER: &str = "04";
    pub const REFERENCE_LABEL: &str = "05";
    pub const CUSTOMER_LABEL: &str = "06";
    pub const TERMINAL_LABEL: &str = "07";
    pub const PURPOSE_OF_TRANSACTION: &str = "08";
    pub const ADDITIONAL_CONSUMER_DATA_REQUEST: &str = "09";
    pub const MERCHANT_TAX_ID: &str = "10";
    pub const MERCHANT_CHANNEL: &str = "11";

    /// Reserved for future use, inclusive
    pub const RFU_START: u8 = 12;
    pub const RFU_END: u8 = 49;

    /// Payment system specific templates, inclusive
    pub const PAYMENT_SYSTEM_SPECIFIC_START: u8 = 50;
    pub const PAYMENT_SYSTEM_SPECIFIC_END: u8 = 99;
}

/// Content markers
pub mod contents {
    pub const CATEGORY_STATIC: &str = "11";
    pub const CATEGORY_DYNAMIC: &str = "12";
    pub const FEE_CATEGORY_FIXED: &str = "02";
    pub const FEE_CATEGORY_PERCENT: &str = "03";
}
