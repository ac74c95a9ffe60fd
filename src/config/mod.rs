//! Configuration module for tag
//!
//! Manages user settings: the attribute tags are stored in, whether output is
//! colorized by default, and the directories behind each find scope.
//! Configuration is stored in the user's config directory
//! (`~/.config/tag/config.toml` on Linux) and may be overridden with
//! `TAG_`-prefixed environment variables (e.g. `TAG_ATTRIBUTE`).

use crate::store::DEFAULT_ATTRIBUTE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

fn default_local_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}

/// Directories searched by each find scope
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScopeSettings {
    /// Overrides the detected home directory
    #[serde(default)]
    pub home: Option<PathBuf>,

    /// Roots of the local scope
    #[serde(default = "default_local_roots")]
    pub local: Vec<PathBuf>,

    /// Roots of the network scope (mount points)
    #[serde(default)]
    pub network: Vec<PathBuf>,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            home: None,
            local: default_local_roots(),
            network: Vec::new(),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Extended attribute holding the tags
    #[serde(default = "default_attribute")]
    pub attribute: String,

    /// Colorize tags by default
    #[serde(default)]
    pub color: bool,

    /// Find scope roots
    #[serde(default)]
    pub scopes: ScopeSettings,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            color: false,
            scopes: ScopeSettings::default(),
        }
    }
}

impl TagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tag").join("config.toml"))
    }

    /// Load configuration from the user's config file and the environment
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` (optional) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("TAG").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is not valid TOML or has wrongly typed keys.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
