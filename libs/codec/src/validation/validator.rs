//! # Payment Record Validator
//!
//! Structural rules for a decoded [`PaymentRecord`]. Every rule is checked
//! and every failure reported; nothing here returns early on the first
//! problem. The order of the resulting list is fixed:
//!
//! 1. required top-level tags, in declaration order
//! 2. category content
//! 3. acquirer presence, then its nested slots
//! 4. switching, only for the plain acquirer tag
//!
//! Checksum comparison is a separate check (see [`super::checksum`]) and is
//! appended by the caller after these rules.

use thiserror::Error;
use types::{Field, PaymentRecord};

use qris_config::Registry;

/// One failed validation rule
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field or nested slot is absent
    #[error("{0} tag is missing")]
    MissingTag(&'static str),

    /// Category content is neither the static nor the dynamic marker
    #[error("category content undefined")]
    CategoryContentUndefined,

    /// Stored checksum differs from the recomputed one
    #[error("crc code mismatch")]
    ChecksumMismatch { stored: String, calculated: String },
}

/// Validates records against a registry
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator<'a> {
    registry: &'a Registry,
}

impl<'a> RecordValidator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Every rule the record breaks, in reporting order
    pub fn violations(&self, record: &PaymentRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        let required: [(&Field, &'static str); 9] = [
            (&record.version, "version"),
            (&record.category, "category"),
            (&record.merchant_category_code, "merchant category code"),
            (&record.currency_code, "currency code"),
            (&record.country_code, "country code"),
            (&record.merchant_name, "merchant name"),
            (&record.merchant_city, "merchant city"),
            (&record.merchant_postal_code, "merchant postal code"),
            (&record.crc_code, "crc code"),
        ];
        require_all(&mut violations, &required);

        if self
            .registry
            .contents
            .category(record.category.content())
            .is_none()
        {
            violations.push(Violation::CategoryContentUndefined);
        }

        if !record.acquirer.is_set() {
            violations.push(Violation::MissingTag("acquirer"));
            return violations;
        }

        let acquirer = &record.acquirer.detail;
        require_all(
            &mut violations,
            &[
                (&acquirer.site, "acquirer site"),
                (&acquirer.mpan, "acquirer mpan"),
                (&acquirer.terminal_id, "acquirer terminal id"),
            ],
        );

        // Bank-transfer acquirers are not routed through the national switch
        if record.acquirer.tag() == self.registry.tags.acquirer {
            require_all(&mut violations, &[(&acquirer.category, "acquirer category")]);

            if !record.switching.is_set() {
                violations.push(Violation::MissingTag("switching"));
            } else {
                let switching = &record.switching.detail;
                require_all(
                    &mut violations,
                    &[
                        (&switching.site, "switching site"),
                        (&switching.nmid, "switching nmid"),
                        (&switching.category, "switching category"),
                    ],
                );
            }
        }

        violations
    }

    /// Violations rendered as user-facing messages
    pub fn validate(&self, record: &PaymentRecord) -> Vec<String> {
        self.violations(record)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

fn require_all(violations: &mut Vec<Violation>, fields: &[(&Field, &'static str)]) {
    for &(field, name) in fields {
        if !field.is_set() {
            violations.push(Violation::MissingTag(name));
        }
    }
}
