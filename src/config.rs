//! Configuration management for the rolo binary.
//!
//! This module handles loading configuration from environment variables.
//! Every variable is optional with a default, so loading never fails.

use std::env;
use std::path::PathBuf;

/// Data file used when `ROLO_DATA_FILE` is unset.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for the rolo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book
    pub data_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLO_DATA_FILE`: path of the persisted address book
    ///   (default: `addressbook.json`)
    /// - `LOG_LEVEL`: default tracing filter (default: "warn")
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let data_file = env::var("ROLO_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Config {
            data_file,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
        }
    }
}
