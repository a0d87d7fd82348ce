//! Application configuration loaded from an optional `config.toml`.
//!
//! Every setting has a default, so a missing file is not an error. A file that
//! exists but cannot be read or parsed is reported as [`Error::Config`].

/// Storage locations for the persisted collections
pub mod storage;

pub use storage::StorageConfig;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file, resolved against the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where menu, transactions and admins are stored
    pub storage: StorageConfig,
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads `config.toml` if present, falling back to defaults otherwise.
///
/// # Errors
/// Returns an error if the file exists but is invalid.
pub fn load_app_configuration() -> Result<AppConfig> {
    load_config_or_default(DEFAULT_CONFIG_PATH)
}

/// Loads configuration from `path`, or the defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but is invalid.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        let config = load_config(path_ref)?;
        tracing::info!("Loaded configuration from {}", path_ref.display());
        Ok(config)
    } else {
        tracing::debug!(
            "No configuration file at {}, using defaults",
            path_ref.display()
        );
        Ok(AppConfig::default())
    }
}
