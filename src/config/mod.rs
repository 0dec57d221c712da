//! Configuration module
//!
//! Handles loading and saving of journal.toml configuration files.
//! Defines Config, Display, and ColorMode types.

mod types;

#[allow(unused_imports)]
pub use types::{ColorMode, Config, Display};

use crate::error::{JournalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "journal.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        JournalError::Config(format!(
            "Cannot read config from '{}': {}. Run 'journal config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the configuration for a command
///
/// An explicit path must exist. Without one, `journal.toml` in the working
/// directory is used when present, otherwise the built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return load(path);
    }

    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        log::debug!("loading config from {}", fallback.display());
        load(&fallback)
    } else {
        log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
