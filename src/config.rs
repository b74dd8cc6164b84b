//! Application configuration parsing and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{AppError, Result};

fn default_db_path() -> PathBuf {
    PathBuf::from("eisenplan.db")
}

fn default_http_port() -> u16 {
    8080
}

/// Application configuration parsed from `config.toml`.
///
/// Every field carries a serde default so the server runs without a
/// config file at all; CLI flags may override individual fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Path to the `SQLite` database file. Created on first start.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// HTTP port the server binds on (loopback only).
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            http_port: default_http_port(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("db_path must not be empty".into()));
        }
        Ok(())
    }
}
