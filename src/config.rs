//! Configuration management for daybook.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present; nothing is ever printed
//! to stdout, which belongs to the REPL.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persistence files (default: current directory)
    pub data_dir: PathBuf,

    /// Default window for the `birthdays` command, in days (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DAYBOOK_DATA_DIR`: directory for contacts.json / notes.json (default ".")
    /// - `DAYBOOK_BIRTHDAY_WINDOW_DAYS`: default birthday window (default 7)
    /// - `LOG_LEVEL`: logging level (default "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_dir = env::var("DAYBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let birthday_window_days = Self::parse_env_u64("DAYBOOK_BIRTHDAY_WINDOW_DAYS", 7)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_dir,
            birthday_window_days,
            log_level,
        })
    }

    /// Path of the contacts persistence file.
    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join("contacts.json")
    }

    /// Path of the notes persistence file.
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
