//! Configuration management
//!
//! Server URL priority: CLI argument > ROWSCOPE_URL environment variable >
//! config.toml > built-in default.

use super::Result;
use crate::api::client::DEFAULT_TIMEOUT_SECS;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const URL_ENV_VAR: &str = "ROWSCOPE_URL";
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Backend server URL
    pub url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to parse config file: {}", e),
        })
    }

    /// Save configuration to file, creating the directory if needed.
    pub fn save(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(config_path)
    }

    /// `~/.config/rowscope/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join("rowscope").join("config.toml"))
    }

    /// Resolve the server URL, reading the environment variable.
    pub fn resolve_url(&self, cli_url: Option<&str>) -> String {
        self.resolve_url_with_env(cli_url, std::env::var(URL_ENV_VAR).ok())
    }

    pub fn resolve_url_with_env(&self, cli_url: Option<&str>, env_url: Option<String>) -> String {
        cli_url
            .map(str::to_string)
            .or_else(|| env_url.filter(|s| !s.is_empty()))
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout_secs = Some(secs);
    }
}
