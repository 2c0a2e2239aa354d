//! Service Configuration Module
//!
//! Loads the registry and logging settings for QRIS tooling. Sources are
//! layered: built-in QRIS defaults, then an optional TOML file, then
//! `QRIS_`-prefixed environment variables (`QRIS_LOGGING__LEVEL=debug`,
//! `QRIS_REGISTRY__TAGS__MERCHANT_CITY=60`).

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::Registry;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "QRIS";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrisConfig {
    /// Tag codes and content markers
    pub registry: Registry,

    /// Logging settings for binaries
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl QrisConfig {
    /// Load configuration from an optional file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading QRIS config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        } else {
            debug!("No config file given, using built-in QRIS registry");
        }

        // Values stay strings: "00" must not become the integer 0
        builder = builder.add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: QrisConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: QrisConfig = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML, e.g. to seed a config file
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        self.registry
            .validate()
            .context("Invalid registry configuration")
    }

    /// Freeze the registry for sharing across components
    pub fn shared_registry(&self) -> Arc<Registry> {
        Arc::new(self.registry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = QrisConfig::load_with_prefix(None, "QRISTEST_NONE").unwrap();
        assert_eq!(config, QrisConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("qris.toml");

        let config_content = r#"
[logging]
level = "debug"

[registry.tags]
acquirer_bank_transfer = "41"

[registry.contents]
fee_category_percent = "04"
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = QrisConfig::load_with_prefix(Some(&config_path), "QRISTEST_FILE").unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
        assert_eq!(config.registry.tags.acquirer_bank_transfer, "41");
        assert_eq!(config.registry.tags.acquirer, "26");
        assert_eq!(config.registry.contents.fee_category_percent, "04");
        assert_eq!(config.registry.contents.fee_category_fixed, "02");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(QrisConfig::load_with_prefix(Some(&missing), "QRISTEST_MISSING").is_err());
    }

    #[test]
    fn test_environment_override() {
        std::env::set_var("QRISTEST_ENV_LOGGING__LEVEL", "trace");
        std::env::set_var("QRISTEST_ENV_REGISTRY__TAGS__MERCHANT_CITY", "60");

        let config = QrisConfig::load_with_prefix(None, "QRISTEST_ENV").unwrap();

        std::env::remove_var("QRISTEST_ENV_LOGGING__LEVEL");
        std::env::remove_var("QRISTEST_ENV_REGISTRY__TAGS__MERCHANT_CITY");

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.registry.tags.merchant_city, "60");
    }

    #[test]
    fn test_invalid_registry_is_rejected() {
        let result = QrisConfig::from_toml_str(
            r#"
[registry.tags]
version = "0"
"#,
        );
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("tags.version"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = QrisConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(QrisConfig::from_toml_str(&text).unwrap(), config);
    }
}
