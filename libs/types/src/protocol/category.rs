//! Payload and fee category kinds
//!
//! The wire markers for these (`"11"`, `"02"`...) are configuration and live
//! in the content registry; these enums only name the kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Point of initiation: static payloads carry no amount, dynamic ones do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum PayloadCategory {
    Static,
    Dynamic,
}

/// How the convenience fee is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "UPPERCASE"))]
pub enum FeeCategory {
    Fixed,
    Percent,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown fee category {0:?}: expected FIXED or PERCENT")]
pub struct UnknownFeeCategory(pub String);

impl FeeCategory {
    /// Parse the request label; empty or unknown labels mean "no fee"
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeeCategory::Fixed => "FIXED",
            FeeCategory::Percent => "PERCENT",
        }
    }
}

impl FromStr for FeeCategory {
    type Err = UnknownFeeCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(FeeCategory::Fixed),
            "PERCENT" => Ok(FeeCategory::Percent),
            other => Err(UnknownFeeCategory(other.to_string())),
        }
    }
}

impl fmt::Display for FeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_category_labels() {
        assert_eq!(FeeCategory::from_label("FIXED"), Some(FeeCategory::Fixed));
        assert_eq!(FeeCategory::from_label("PERCENT"), Some(FeeCategory::Percent));
        assert_eq!(FeeCategory::from_label(""), None);
        assert_eq!(FeeCategory::from_label("fixed"), None);
        assert_eq!(FeeCategory::Percent.to_string(), "PERCENT");
    }
}
