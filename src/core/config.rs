//! Settings file management.
//!
//! Handles reading and validating `paramsync.toml`. A missing file means
//! defaults; values here replace what would otherwise be process-wide
//! constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key applied to SecureString parameters with no key annotation.
    pub default_kms_key: String,
    /// Reject unrecognised parameter types instead of writing an empty marker.
    pub strict_param_types: bool,
    /// AWS region for the SSM client. Falls back to the provider chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_kms_key: constants::DEFAULT_KMS_KEY.to_string(),
            strict_param_types: false,
            region: None,
        }
    }
}

impl Settings {
    /// Path to the settings file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but can't be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings = Self::from_toml(&contents)?;

        debug!(
            default_kms_key = %settings.default_kms_key,
            strict = settings.strict_param_types,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> Result<()> {
        if self.default_kms_key.trim().is_empty() {
            return Err(ConfigError::Invalid("default_kms_key cannot be empty".into()).into());
        }
        Ok(())
    }
}
