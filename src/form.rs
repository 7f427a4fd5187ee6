//! Trade form
//!
//! Symbol, quantity and price fields with submit and reset actions, and the
//! portfolio the submitted orders build up.

pub mod form_render;
mod form_state;
mod order;
mod portfolio;

pub use form_state::{FormButton, TradeForm};
pub use order::{Order, OrderError, validate_order};
pub use portfolio::{Holding, Portfolio, PortfolioError, TradeError, average_price};
