//! Configuration module for bookr
//!
//! Manages application configuration: the default catalog file, output
//! verbosity, the duplicate-title policy and the filter cache size.
//! Configuration is stored in the user's config directory.

use crate::catalog::IdentityPolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `bookr config get/set`
pub const KEYS: [&str; 4] = ["catalog", "quiet", "strict_identity", "cache_capacity"];

const fn default_cache_capacity() -> u64 {
    crate::search::cache::DEFAULT_CAPACITY
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookrConfig {
    /// Catalog file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Refuse catalogs with duplicate titles instead of warning
    #[serde(default)]
    pub strict_identity: bool,

    /// Number of filter results to memoize; 0 disables the cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for BookrConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            quiet: false,
            strict_identity: false,
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl BookrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bookr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// How catalog loading should treat duplicate titles
    #[must_use]
    pub const fn identity_policy(&self) -> IdentityPolicy {
        if self.strict_identity {
            IdentityPolicy::Strict
        } else {
            IdentityPolicy::Warn
        }
    }

    /// Read a setting as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default()),
            "quiet" => Ok(self.quiet.to_string()),
            "strict_identity" => Ok(self.strict_identity.to_string()),
            "cache_capacity" => Ok(self.cache_capacity.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a setting from text
    ///
    /// An empty value for `catalog` clears it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "catalog" => {
                self.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "quiet" => self.quiet = parse_bool(key, value)?,
            "strict_identity" => self.strict_identity = parse_bool(key, value)?,
            "cache_capacity" => {
                self.cache_capacity = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for {key}: '{value}'. Use a non-negative integer"
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::NotFound(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
