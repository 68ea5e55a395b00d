//! Configuration Module
//!
//! This module defines the configuration structures for the validator.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::signature::SignatureScheme;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Every section is optional and falls back to its defaults.
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [validation]
/// signature_scheme = "personal-message"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Validation configuration
///
/// # Fields
/// - `signature_scheme`: `"personal-message"` (EIP-191, default) or `"raw-hash"`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub signature_scheme: SignatureScheme,
}

/// Logging configuration
///
/// # Fields
/// - `level`: Maximum tracing level: "trace", "debug", "info", "warn" or "error"
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    ///
    /// # Example
    /// ```no_run
    /// let config = utxo_validator::Config::load("config/default.toml")?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.validation.signature_scheme, SignatureScheme::PersonalMessage);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            [validation]
            signature_scheme = "raw-hash"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.validation.signature_scheme, SignatureScheme::RawHash);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        let result = Config::from_toml_str("[validation]\nsignature_scheme = \"ed25519\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::load("does/not/exist.toml").is_err());
    }

    #[test]
    fn test_shipped_default_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.validation.signature_scheme, SignatureScheme::PersonalMessage);
    }
}
