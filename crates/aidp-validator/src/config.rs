// crates/aidp-validator/src/config.rs
// ============================================================================
// Module: Validator Configuration
// Description: Loading and validation of `aidp.toml`.
// Purpose: Strict, fail-closed configuration parsing with hard input limits.
// Dependencies: serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with size, path, and encoding
//! limits. A missing `[validation]` table yields the defaults: strict rule
//! enforcement, open objects, and format assertions on. Inconsistent flags
//! are rejected rather than silently reinterpreted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use tracing::warn;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File consulted when neither an explicit path nor the environment names one.
const DEFAULT_CONFIG_NAME: &str = "aidp.toml";
/// Environment variable naming an alternate config file.
pub(crate) const CONFIG_ENV_VAR: &str = "AIDP_CONFIG";
/// Upper bound on config file size (1 MiB).
pub(crate) const CONFIG_SIZE_LIMIT: u64 = 1024 * 1024;
/// Upper bound on any single path segment, in bytes.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Upper bound on the whole config path, in bytes.
pub(crate) const PATH_LENGTH_LIMIT: usize = 4096;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Top-level validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Validation behaviour.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl ValidatorConfig {
    /// Loads configuration from disk.
    ///
    /// Resolution order: the explicit `path`, then the `AIDP_CONFIG`
    /// environment variable, then `aidp.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path is unusable, the file cannot be
    /// read, exceeds the size limit, is not UTF-8, fails to parse, or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let source = config_source(path)?;
        let content = read_bounded(&source)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %source.display(),
            strict = config.validation.strict,
            allow_additional = config.validation.allow_additional,
            "loaded validator config"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for inconsistent settings.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects flag combinations that contradict each other.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending flags.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()
    }
}

/// Validation behaviour flags.
#[allow(clippy::struct_excessive_bools, reason = "Config flags mirror user-facing toggles.")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Business-rule findings reject the payload (default on).
    #[serde(default = "default_true")]
    pub strict: bool,
    /// Explicit opt-in required before `strict` may be turned off.
    #[serde(default)]
    pub allow_permissive: bool,
    /// Accept properties the schema does not declare (default on).
    #[serde(default = "default_true")]
    pub allow_additional: bool,
    /// Assert `format` keywords such as `email`, `uri`, and `date` (default on).
    #[serde(default = "default_true")]
    pub validate_formats: bool,
    /// Coerce numeric and boolean strings where the schema expects those types.
    #[serde(default)]
    pub coerce_types: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: true,
            allow_permissive: false,
            allow_additional: true,
            validate_formats: true,
            coerce_types: false,
        }
    }
}

impl ValidationConfig {
    /// Returns a permissive configuration: rule findings become warnings.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            strict: false,
            allow_permissive: true,
            ..Self::default()
        }
    }

    /// Checks the strict/permissive pairing.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.strict, self.allow_permissive) {
            (false, false) => Err(ConfigError::Invalid(
                "validation.strict=false requires validation.allow_permissive=true".to_string(),
            )),
            (false, true) => {
                warn!("validator configured in permissive mode; rule findings become warnings");
                Ok(())
            }
            (true, _) => Ok(()),
        }
    }
}

/// Serde default for flags that are on unless disabled.
const fn default_true() -> bool {
    true
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while locating, reading, or checking `aidp.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("config io error: {0}")]
    Io(String),
    /// The file is not well-formed TOML for this schema.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The path, size, encoding, or flag combination is unacceptable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the config file: explicit argument, then `AIDP_CONFIG`, then the default name.
fn config_source(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let source = match path {
        Some(path) => path.to_path_buf(),
        None => env::var_os(CONFIG_ENV_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from),
    };
    validate_path(&source)?;
    Ok(source)
}

/// Enforces the overall and per-segment path length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > PATH_LENGTH_LIMIT {
        return Err(ConfigError::Invalid(format!(
            "config path longer than {PATH_LENGTH_LIMIT} bytes"
        )));
    }
    let oversized = path
        .components()
        .any(|segment| segment.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if oversized {
        return Err(ConfigError::Invalid(format!(
            "config path segment longer than {MAX_PATH_COMPONENT_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Reads the file as UTF-8 text, refusing anything over the size limit.
fn read_bounded(path: &Path) -> Result<String, ConfigError> {
    let file = fs::File::open(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    let mut bytes = Vec::new();
    file.take(CONFIG_SIZE_LIMIT + 1)
        .read_to_end(&mut bytes)
        .map_err(|err| ConfigError::Io(err.to_string()))?;
    if !u64::try_from(bytes.len()).is_ok_and(|len| len <= CONFIG_SIZE_LIMIT) {
        return Err(ConfigError::Invalid("config file larger than 1 MiB".to_string()));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid("config file is not valid UTF-8".to_string()))
}

#[cfg(test)]
mod tests;
