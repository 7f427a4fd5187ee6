//! Candidate ticker symbols
//!
//! The candidate set is fixed for the lifetime of the app and shared
//! read-only by every typeahead bound to a field.

mod candidates;
mod loader;

pub use candidates::CandidateSet;
pub use loader::{load_symbols, parse_symbols};
