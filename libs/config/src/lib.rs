//! # QRIS Configuration
//!
//! Tag codes, content markers and service settings for the QRIS codec.
//!
//! ## Features
//!
//! - **Protocol Constants**: the stock QRIS tag set and category markers
//! - **Registries**: immutable [`Registry`] value shared as `Arc<Registry>`
//! - **Service Configuration**: TOML file plus `QRIS_` environment overrides
//!
//! ## Usage
//!
//! ```rust
//! use qris_config::{protocol, Registry};
//!
//! let registry = Registry::qris();
//! assert_eq!(registry.tags.crc_code, protocol::tags::CRC_CODE);
//! ```

pub mod protocol;
pub mod registry;
pub mod service_config;

// Re-export commonly used types
pub use registry::{
    AcquirerTags, AdditionalInformationTags, ContentRegistry, Registry, SwitchingTags, TagRange,
    TagRegistry,
};
pub use service_config::{LoggingConfig, QrisConfig, ENV_PREFIX};
