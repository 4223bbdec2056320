//! Converter configuration file support.
//!
//! A configuration document is TOML:
//!
//! ```toml
//! [validation]
//! policy = "lenient"   # or "strict" (default)
//! ```
//!
//! Every section and key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use convkit_core::Validation;

/// Environment variable consulted by [`ConverterConfig::from_env`].
pub const VALIDATION_ENV: &str = "CONVKIT_VALIDATION";

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid TOML or does not match the expected shape.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The validation policy name is not recognised.
    #[error("{0}")]
    UnknownPolicy(String),
}

/// Converter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Magnitude validation settings.
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// The `[validation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Policy name, `"strict"` or `"lenient"`.
    #[serde(default = "default_policy")]
    pub policy: String,
}

fn default_policy() -> String {
    Validation::default().as_str().to_string()
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            policy: default_policy(),
        }
    }
}

impl ConverterConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed, [`ConfigError::UnknownPolicy`] if the policy name is not
    /// recognised.
    ///
    /// ```rust
    /// use convkit::config::ConverterConfig;
    /// use convkit::Validation;
    ///
    /// let config = ConverterConfig::from_toml_str("[validation]\npolicy = \"lenient\"\n")?;
    /// assert_eq!(config.validation()?, Validation::Lenient);
    /// assert_eq!(ConverterConfig::from_toml_str("")?.validation()?, Validation::Strict);
    /// # Ok::<(), convkit::config::ConfigError>(())
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validation()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as [`ConverterConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loading converter config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Builds a configuration from the `CONVKIT_VALIDATION` environment variable.
    ///
    /// Falls back to the defaults when the variable is unset.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownPolicy`] if the variable holds an unrecognised policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(VALIDATION_ENV) {
            Ok(policy) => {
                let config = Self {
                    validation: ValidationSettings { policy },
                };
                config.validation()?;
                Ok(config)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// The configured validation policy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownPolicy`] if the policy name is not recognised.
    pub fn validation(&self) -> Result<Validation, ConfigError> {
        Validation::from_str(&self.validation.policy).map_err(ConfigError::UnknownPolicy)
    }
}

impl From<Validation> for ConverterConfig {
    fn from(validation: Validation) -> Self {
        Self {
            validation: ValidationSettings {
                policy: validation.as_str().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.validation().unwrap(), Validation::Strict);
    }

    #[test]
    fn empty_section_uses_default_policy() {
        let config = ConverterConfig::from_toml_str("[validation]\n").unwrap();
        assert_eq!(config.validation.policy, "strict");
    }

    #[test]
    fn policy_is_case_insensitive() {
        let config = ConverterConfig::from_toml_str("[validation]\npolicy = \"LENIENT\"\n").unwrap();
        assert_eq!(config.validation().unwrap(), Validation::Lenient);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = ConverterConfig::from_toml_str("[validation]\npolicy = \"sloppy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPolicy(_)));
        assert!(err.to_string().contains("sloppy"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = ConverterConfig::from_toml_str("[validation\npolicy = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = ConverterConfig::from_toml_str("[validation]\npolicy = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = ConverterConfig::from(Validation::Lenient);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("[validation]"));
        assert!(text.contains("policy = \"lenient\""));
        assert_eq!(ConverterConfig::from_toml_str(&text).unwrap(), config);
    }
}
