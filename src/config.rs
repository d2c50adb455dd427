//! Configuration module for brewtour
//!
//! Manages the API endpoint, page size, allowed brewery types and logging.
//! Configuration is stored in the user's config directory and can be
//! overridden with `BREWTOUR_*` environment variables.

use crate::api::{DEFAULT_API_URL, DEFAULT_PER_PAGE};
use crate::brewery::BreweryType;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BrewConfig {
    /// Base URL of the Open Brewery DB API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of breweries requested per state
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Brewery types kept from every fetch
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<BreweryType>,

    /// Default log filter (overridden by `BREWTOUR_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file used by the TUI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_allowed_types() -> Vec<BreweryType> {
    BreweryType::SELECTABLE.to_vec()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            per_page: default_per_page(),
            timeout_secs: None,
            allowed_types: default_allowed_types(),
            log_level: default_log_level(),
            log_file: None,
            quiet: false,
        }
    }
}

impl BrewConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("brewtour").join("config.toml"))
    }

    /// Load configuration, creating the default file if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("BREWTOUR").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Default log file location for the TUI
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("brewtour").join("brewtour.log"))
        })
    }
}
