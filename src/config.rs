//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory. A missing file is
//! not an error; an unreadable or malformed one falls back to defaults and
//! reports a warning for the status line.

mod types;

use std::path::{Path, PathBuf};

use crate::error::AppError;

pub use types::{Config, SymbolsConfig, TypeaheadConfig};

const APP_DIR: &str = "ticker-typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading configuration
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return ConfigResult::default(),
        },
    };

    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return ConfigResult::default();
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}; using defaults", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| AppError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
