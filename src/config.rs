// Configuration module for the scrollbar demo
// This module handles loading and parsing configuration from ~/.config/scrollbar/config.toml

mod types;

pub use types::{AxisDefinition, Config, ScrollConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrollbarError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/scrollbar/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match load_config_from_path(&config_path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to load config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Reads, parses and validates the config file at `path`
pub fn load_config_from_path(path: &Path) -> Result<Config, ScrollbarError> {
    let contents = fs::read_to_string(path)?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    let config = Config::from_toml_str(&contents)?;

    #[cfg(debug_assertions)]
    log::debug!("Config parsed successfully: {:?}", config);

    Ok(config)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/scrollbar/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("scrollbar")
        .join("config.toml")
}
