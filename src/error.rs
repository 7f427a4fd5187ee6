use thiserror::Error;

/// Custom error types for ticker-typeahead
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid symbols file {path}: {message}")]
    Symbols { path: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
