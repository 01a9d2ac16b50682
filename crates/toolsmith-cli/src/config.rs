//! Configuration for the toolsmith CLI.
//!
//! The file is resolved in this order:
//!
//! 1. `--config <path>` (or `$TOOLSMITH_CONFIG`, via clap)
//! 2. `<config dir>/toolsmith/config.toml`
//! 3. Built-in defaults
//!
//! ```toml
//! [clone]
//! detect_cycles = true
//! max_depth = 256
//! strings_as_leaves = true
//!
//! [log]
//! filter = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toolsmith_clone::CloneOptions;

use crate::error::{Error, Result};

/// Directory and binary name used for config lookup.
pub const PROJECT_NAME: &str = "toolsmith";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsmithConfig {
    /// Graph cloner options
    pub clone: CloneOptions,
    /// Logging settings
    pub log: LogConfig,
}

impl ToolsmithConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config file to read.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit.map(PathBuf::from).or_else(Self::default_config_path)
    }

    /// Loads configuration.
    ///
    /// An explicitly named file must exist. The default location is optional;
    /// without it the built-in defaults apply.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.is_file() => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                log::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
