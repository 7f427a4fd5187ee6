use std::path::Path;

use serde::Deserialize;

use super::CandidateSet;
use crate::error::AppError;

/// Security type marking a common stock in reference-data exports
const COMMON_STOCK: &str = "cs";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SymbolEntry {
    Plain(String),
    Security(Security),
}

#[derive(Debug, Deserialize)]
struct Security {
    symbol: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parse a JSON array of symbols.
///
/// Entries are either plain strings or reference-data objects; objects are
/// kept only when they describe a common stock with a symbol.
pub fn parse_symbols(json: &str) -> Result<CandidateSet, serde_json::Error> {
    let entries: Vec<SymbolEntry> = serde_json::from_str(json)?;

    let symbols = entries.into_iter().filter_map(|entry| match entry {
        SymbolEntry::Plain(symbol) => Some(symbol),
        SymbolEntry::Security(Security {
            symbol: Some(symbol),
            kind: Some(kind),
        }) if kind == COMMON_STOCK => Some(symbol),
        SymbolEntry::Security(_) => None,
    });

    Ok(CandidateSet::new(symbols))
}

pub fn load_symbols(path: &Path) -> Result<CandidateSet, AppError> {
    let content = std::fs::read_to_string(path)?;
    let symbols = parse_symbols(&content).map_err(|e| AppError::Symbols {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::debug!("Loaded {} symbols from {}", symbols.len(), path.display());
    Ok(symbols)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
