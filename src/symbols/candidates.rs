use std::sync::Arc;

/// Common stocks offered when no symbols file is configured
const BUILTIN_SYMBOLS: &[&str] = &[
    "AAPL", "ABBV", "ABT", "ADBE", "AMD", "AMZN", "AVGO", "BA", "BAC", "BRK.B", "C", "CAT",
    "COST", "CRM", "CSCO", "CVX", "DIS", "GE", "GOOG", "GOOGL", "GS", "HD", "IBM", "INTC",
    "JNJ", "JPM", "KO", "LLY", "MA", "MCD", "META", "MRK", "MS", "MSFT", "NFLX", "NKE", "NVDA",
    "ORCL", "PEP", "PFE", "PG", "PYPL", "QCOM", "SBUX", "T", "TSLA", "UNH", "V", "VZ", "WMT",
    "XOM",
];

/// Ordered, immutable list of ticker symbols
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    symbols: Arc<[String]>,
}

impl CandidateSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_SYMBOLS.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Case-insensitive membership test
    pub fn contains_ignore_case(&self, symbol: &str) -> bool {
        self.symbols
            .iter()
            .any(|candidate| candidate.to_uppercase() == symbol.to_uppercase())
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod candidates_tests;
