//! Configuration management for the fixture runner.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the fixture runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Phone-number fixture file (default: built-in numbers)
    pub fixture_path: Option<PathBuf>,

    /// First name paired with every fixture phone number (default: "John")
    pub first_name: String,

    /// Last name paired with every fixture phone number (default: "Doe")
    pub last_name: String,

    /// Times each fixture row is inserted (default: 1)
    pub repeat_count: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_FIXTURE_PATH`: Phone-number fixture file
    /// - `CONTACT_FIRST_NAME`: First name for inserted contacts (default: "John")
    /// - `CONTACT_LAST_NAME`: Last name for inserted contacts (default: "Doe")
    /// - `REPEAT_COUNT`: Insertions per fixture row, at least 1 (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let fixture_path = env::var("CONTACT_FIXTURE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let first_name = env::var("CONTACT_FIRST_NAME").unwrap_or(defaults.first_name);
        let last_name = env::var("CONTACT_LAST_NAME").unwrap_or(defaults.last_name);

        let repeat_count = Self::parse_env_usize("REPEAT_COUNT", defaults.repeat_count)?;
        if repeat_count == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REPEAT_COUNT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            fixture_path,
            first_name,
            last_name,
            repeat_count,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

/// Log level from a configuration load, falling back to [`DEFAULT_LOG_LEVEL`]
/// when loading failed.
pub fn log_level_or_default(config: &ConfigResult<Config>) -> &str {
    match config {
        Ok(config) => &config.log_level,
        Err(_) => DEFAULT_LOG_LEVEL,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fixture_path: None,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            repeat_count: 1,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
