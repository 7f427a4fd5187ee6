//! Ticker typeahead
//!
//! A controller bound to one text field. It filters the candidate set by
//! case-insensitive prefix on every edit, owns the popup of matches and its
//! keyboard cursor, and closes the popup on selection or on a press outside
//! the field and the popup.

mod matcher;
mod suggestion_list;
pub mod typeahead_render;
mod typeahead_state;

pub use matcher::{SuggestionItem, filter_candidates, match_prefix};
pub use suggestion_list::{PopupId, SuggestionList};
pub use typeahead_state::{KeyHandling, PopupLedger, Typeahead};
