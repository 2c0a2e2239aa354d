//! # Tag and Content Registries
//!
//! ## Purpose
//!
//! Maps every domain slot of a QRIS payload to its tag code, and every
//! category marker to its content value. Built once at startup (from the
//! protocol constants or from a configuration file), checked with
//! [`Registry::validate`], then shared read-only behind an `Arc` by the
//! parser, validator and transformer.
//!
//! ## Layout
//!
//! ```text
//! Registry
//! ├── tags: TagRegistry
//! │   ├── top-level tags (version, category, acquirer, ...)
//! │   ├── acquirer_detail: AcquirerTags
//! │   ├── switching_detail: SwitchingTags
//! │   └── additional_information_detail: AdditionalInformationTags
//! │       └── rfu / payment_system_specific: TagRange (inclusive)
//! └── contents: ContentRegistry (static/dynamic, fixed/percent)
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use types::{FeeCategory, PayloadCategory};

use crate::protocol::{acquirer, additional_information, contents, switching, tags};

static QRIS_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::default()));

/// Complete tag and content configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    pub tags: TagRegistry,
    pub contents: ContentRegistry,
}

impl Registry {
    /// Shared handle to the stock QRIS registry
    pub fn qris() -> Arc<Registry> {
        Arc::clone(&QRIS_REGISTRY)
    }

    /// Reject registries the codec cannot work with
    ///
    /// Every tag must be two ASCII digits, top-level tags must be distinct,
    /// ranges must not be inverted and category markers must differ.
    pub fn validate(&self) -> Result<()> {
        let t = &self.tags;

        let top_level = [
            ("version", &t.version),
            ("category", &t.category),
            ("acquirer", &t.acquirer),
            ("acquirer_bank_transfer", &t.acquirer_bank_transfer),
            ("switching", &t.switching),
            ("merchant_category_code", &t.merchant_category_code),
            ("currency_code", &t.currency_code),
            ("payment_amount", &t.payment_amount),
            ("payment_fee_category", &t.payment_fee_category),
            ("payment_fee_fixed", &t.payment_fee_fixed),
            ("payment_fee_percent", &t.payment_fee_percent),
            ("country_code", &t.country_code),
            ("merchant_name", &t.merchant_name),
            ("merchant_city", &t.merchant_city),
            ("merchant_postal_code", &t.merchant_postal_code),
            ("additional_information", &t.additional_information),
            ("crc_code", &t.crc_code),
        ];
        check_tags("tags", &top_level)?;

        let a = &t.acquirer_detail;
        check_tags(
            "tags.acquirer_detail",
            &[
                ("site", &a.site),
                ("mpan", &a.mpan),
                ("terminal_id", &a.terminal_id),
                ("category", &a.category),
            ],
        )?;

        let s = &t.switching_detail;
        check_tags(
            "tags.switching_detail",
            &[("site", &s.site), ("nmid", &s.nmid), ("category", &s.category)],
        )?;

        let ai = &t.additional_information_detail;
        check_tags(
            "tags.additional_information_detail",
            &[
                ("bill_number", &ai.bill_number),
                ("mobile_number", &ai.mobile_number),
                ("store_label", &ai.store_label),
                ("loyalty_number", &ai.loyalty_number),
                ("reference_label", &ai.reference_label),
                ("customer_label", &ai.customer_label),
                ("terminal_label", &ai.terminal_label),
                ("purpose_of_transaction", &ai.purpose_of_transaction),
                (
                    "additional_consumer_data_request",
                    &ai.additional_consumer_data_request,
                ),
                ("merchant_tax_id", &ai.merchant_tax_id),
                ("merchant_channel", &ai.merchant_channel),
            ],
        )?;
        ai.rfu.validate("tags.additional_information_detail.rfu")?;
        ai.payment_system_specific
            .validate("tags.additional_information_detail.payment_system_specific")?;

        let c = &self.contents;
        if c.category_static == c.category_dynamic {
            bail!(
                "contents: static and dynamic category markers are both {:?}",
                c.category_static
            );
        }
        if c.fee_category_fixed == c.fee_category_percent {
            bail!(
                "contents: fixed and percent fee markers are both {:?}",
                c.fee_category_fixed
            );
        }

        Ok(())
    }
}

fn is_tag(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit())
}

fn check_tags(section: &str, entries: &[(&str, &String)]) -> Result<()> {
    let mut seen = HashSet::new();
    for (name, tag) in entries {
        if !is_tag(tag) {
            bail!("{section}.{name}: {tag:?} is not a two-digit tag");
        }
        if !seen.insert(tag.as_str()) {
            bail!("{section}.{name}: tag {tag} is assigned to more than one slot");
        }
    }
    Ok(())
}

/// Top-level tag codes plus the nested tag sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRegistry {
    pub version: String,
    pub category: String,
    pub acquirer: String,
    pub acquirer_bank_transfer: String,
    pub switching: String,
    pub merchant_category_code: String,
    pub currency_code: String,
    pub payment_amount: String,
    pub payment_fee_category: String,
    pub payment_fee_fixed: String,
    pub payment_fee_percent: String,
    pub country_code: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub merchant_postal_code: String,
    pub additional_information: String,
    pub crc_code: String,

    pub acquirer_detail: AcquirerTags,
    pub switching_detail: SwitchingTags,
    pub additional_information_detail: AdditionalInformationTags,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self {
            version: tags::VERSION.to_string(),
            category: tags::CATEGORY.to_string(),
            acquirer: tags::ACQUIRER.to_string(),
            acquirer_bank_transfer: tags::ACQUIRER_BANK_TRANSFER.to_string(),
            switching: tags::SWITCHING.to_string(),
            merchant_category_code: tags::MERCHANT_CATEGORY_CODE.to_string(),
            currency_code: tags::CURRENCY_CODE.to_string(),
            payment_amount: tags::PAYMENT_AMOUNT.to_string(),
            payment_fee_category: tags::PAYMENT_FEE_CATEGORY.to_string(),
            payment_fee_fixed: tags::PAYMENT_FEE_FIXED.to_string(),
            payment_fee_percent: tags::PAYMENT_FEE_PERCENT.to_string(),
            country_code: tags::COUNTRY_CODE.to_string(),
            merchant_name: tags::MERCHANT_NAME.to_string(),
            merchant_city: tags::MERCHANT_CITY.to_string(),
            merchant_postal_code: tags::MERCHANT_POSTAL_CODE.to_string(),
            additional_information: tags::ADDITIONAL_INFORMATION.to_string(),
            crc_code: tags::CRC_CODE.to_string(),
            acquirer_detail: AcquirerTags::default(),
            switching_detail: SwitchingTags::default(),
            additional_information_detail: AdditionalInformationTags::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquirerTags {
    pub site: String,
    pub mpan: String,
    pub terminal_id: String,
    pub category: String,
}

impl Default for AcquirerTags {
    fn default() -> Self {
        Self {
            site: acquirer::SITE.to_string(),
            mpan: acquirer::MPAN.to_string(),
            terminal_id: acquirer::TERMINAL_ID.to_string(),
            category: acquirer::CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchingTags {
    pub site: String,
    pub nmid: String,
    pub category: String,
}

impl Default for SwitchingTags {
    fn default() -> Self {
        Self {
            site: switching::SITE.to_string(),
            nmid: switching::NMID.to_string(),
            category: switching::CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalInformationTags {
    pub bill_number: String,
    pub mobile_number: String,
    pub store_label: String,
    pub loyalty_number: String,
    pub reference_label: String,
    pub customer_label: String,
    pub terminal_label: String,
    pub purpose_of_transaction: String,
    pub additional_consumer_data_request: String,
    pub merchant_tax_id: String,
    pub merchant_channel: String,
    pub rfu: TagRange,
    pub payment_system_specific: TagRange,
}

impl Default for AdditionalInformationTags {
    fn default() -> Self {
        use additional_information as ai;
        Self {
            bill_number: ai::BILL_NUMBER.to_string(),
            mobile_number: ai::MOBILE_NUMBER.to_string(),
            store_label: ai::STORE_LABEL.to_string(),
            loyalty_number: ai::LOYALTY_NUMBER.to_string(),
            reference_label: ai::REFERENCE_LABEL.to_string(),
            customer_label: ai::CUSTOMER_LABEL.to_string(),
            terminal_label: ai::TERMINAL_LABEL.to_string(),
            purpose_of_transaction: ai::PURPOSE_OF_TRANSACTION.to_string(),
            additional_consumer_data_request: ai::ADDITIONAL_CONSUMER_DATA_REQUEST.to_string(),
            merchant_tax_id: ai::MERCHANT_TAX_ID.to_string(),
            merchant_channel: ai::MERCHANT_CHANNEL.to_string(),
            rfu: TagRange::new(ai::RFU_START, ai::RFU_END),
            payment_system_specific: TagRange::new(
                ai::PAYMENT_SYSTEM_SPECIFIC_START,
                ai::PAYMENT_SYSTEM_SPECIFIC_END,
            ),
        }
    }
}

/// Inclusive range of numeric tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRange {
    pub start: u8,
    pub end: u8,
}

impl TagRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Whether a two-digit tag falls inside the range
    ///
    /// Tags that are not two ASCII digits never match.
    pub fn contains(&self, tag: &str) -> bool {
        if !is_tag(tag) {
            return false;
        }
        match tag.parse::<u8>() {
            Ok(value) => (self.start..=self.end).contains(&value),
            Err(_) => false,
        }
    }

    fn validate(&self, section: &str) -> Result<()> {
        if self.start > self.end {
            bail!("{section}: start {} is after end {}", self.start, self.end);
        }
        if self.end > 99 {
            bail!("{section}: end {} does not fit a two-digit tag", self.end);
        }
        Ok(())
    }
}

/// Recognized content markers for category and fee category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRegistry {
    pub category_static: String,
    pub category_dynamic: String,
    pub fee_category_fixed: String,
    pub fee_category_percent: String,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self {
            category_static: contents::CATEGORY_STATIC.to_string(),
            category_dynamic: contents::CATEGORY_DYNAMIC.to_string(),
            fee_category_fixed: contents::FEE_CATEGORY_FIXED.to_string(),
            fee_category_percent: contents::FEE_CATEGORY_PERCENT.to_string(),
        }
    }
}

impl ContentRegistry {
    /// Category kind for a content marker, `None` when it is neither
    pub fn category(&self, content: &str) -> Option<PayloadCategory> {
        if content == self.category_static {
            Some(PayloadCategory::Static)
        } else if content == self.category_dynamic {
            Some(PayloadCategory::Dynamic)
        } else {
            None
        }
    }

    pub fn category_marker(&self, category: PayloadCategory) -> &str {
        match category {
            PayloadCategory::Static => &self.category_static,
            PayloadCategory::Dynamic => &self.category_dynamic,
        }
    }

    pub fn fee_marker(&self, category: FeeCategory) -> &str {
        match category {
            FeeCategory::Fixed => &self.fee_category_fixed,
            FeeCategory::Percent => &self.fee_category_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_valid() {
        Registry::default().validate().unwrap();
        assert_eq!(Registry::qris().tags.acquirer, "26");
        assert_eq!(Registry::qris().contents.category_dynamic, "12");
    }

    #[test]
    fn test_shared_registry_is_one_allocation() {
        assert!(Arc::ptr_eq(&Registry::qris(), &Registry::qris()));
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = TagRange::new(12, 49);
        assert!(range.contains("12"));
        assert!(range.contains("49"));
        assert!(!range.contains("11"));
        assert!(!range.contains("50"));
        assert!(!range.contains("1A"));
        assert!(!range.contains("+1"));
        assert!(!range.contains("012"));
    }

    #[test]
    fn test_rejects_non_numeric_tag() {
        let mut registry = Registry::default();
        registry.tags.merchant_city = "6X".to_string();
        let err = registry.validate().unwrap_err().to_string();
        assert!(err.contains("tags.merchant_city"));
    }

    #[test]
    fn test_rejects_duplicate_top_level_tag() {
        let mut registry = Registry::default();
        registry.tags.switching = "26".to_string();
        let err = registry.validate().unwrap_err().to_string();
        assert!(err.contains("more than one slot"));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut registry = Registry::default();
        registry.tags.additional_information_detail.rfu = TagRange::new(49, 12);
        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_category_lookup() {
        let contents = ContentRegistry::default();
        assert_eq!(contents.category("11"), Some(PayloadCategory::Static));
        assert_eq!(contents.category("12"), Some(PayloadCategory::Dynamic));
        assert_eq!(contents.category("13"), None);
        assert_eq!(contents.category(""), None);
        assert_eq!(contents.category_marker(PayloadCategory::Dynamic), "12");
        assert_eq!(contents.fee_marker(FeeCategory::Fixed), "02");
        assert_eq!(contents.fee_marker(FeeCategory::Percent), "03");
    }

    #[test]
    fn test_rejects_identical_category_markers() {
        let mut registry = Registry::default();
        registry.contents.category_dynamic = "11".to_string();
        assert!(registry.validate().is_err());
    }
}
