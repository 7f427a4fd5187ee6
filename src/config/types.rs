// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_MAX_VISIBLE: usize = 8;

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

/// Typeahead popup configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TypeaheadConfig {
    /// Number of suggestion rows shown before the popup scrolls
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        TypeaheadConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl TypeaheadConfig {
    /// Popup window height, never less than one row
    pub fn window_height(&self) -> usize {
        self.max_visible.max(1)
    }
}

/// Candidate source configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SymbolsConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub typeahead: TypeaheadConfig,
    #[serde(default)]
    pub symbols: SymbolsConfig,
}
