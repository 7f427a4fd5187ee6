use crate::config::{Config, TypeaheadConfig};
use crate::form::{Order, Portfolio, TradeError, TradeForm, validate_order};
use crate::input::FieldId;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::symbols::CandidateSet;
use crate::typeahead::Typeahead;

/// Application state
pub struct App {
    pub form: TradeForm,
    pub typeaheads: Vec<Typeahead>,
    pub candidates: CandidateSet,
    pub typeahead_config: TypeaheadConfig,
    pub notification: NotificationState,
    pub regions: LayoutRegions,
    orders: Vec<Order>,
    portfolio: Portfolio,
    pub(super) should_quit: bool,
}

impl App {
    /// Create the app with a typeahead bound to the symbol field
    pub fn new(candidates: CandidateSet, config: &Config) -> Self {
        let form = TradeForm::new();
        let typeaheads = vec![Typeahead::attach(&form.symbol, candidates.clone())];

        Self {
            form,
            typeaheads,
            candidates,
            typeahead_config: config.typeahead.clone(),
            notification: NotificationState::new(),
            regions: LayoutRegions::new(),
            orders: Vec::new(),
            portfolio: Portfolio::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Orders submitted this session, oldest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Holdings after every accepted order
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn typeahead_for(&self, field: FieldId) -> Option<&Typeahead> {
        self.typeaheads.iter().find(|t| t.field() == field)
    }

    /// Validate the form and apply the order to the portfolio, or report
    /// why it was rejected
    pub fn submit(&mut self) {
        match self.place_order() {
            Ok(order) => {
                log::info!("Order submitted: {:?}", order);
                self.notification.info(order.summary());
                self.orders.push(order);
                self.form.reset();
                self.form.set_focus(self.form.symbol.id());
                for typeahead in &mut self.typeaheads {
                    typeahead.close();
                }
            }
            Err(e) => {
                log::debug!("Order rejected: {}", e);
                self.notification.error(e.to_string());
            }
        }
    }

    fn place_order(&mut self) -> Result<Order, TradeError> {
        let order = validate_order(
            self.form.symbol.value(),
            self.form.quantity.value(),
            self.form.price.value(),
            &self.candidates,
        )?;
        self.portfolio.adjust(&order)?;
        Ok(order)
    }

    /// Clear the symbol, quantity and price fields
    pub fn reset(&mut self) {
        self.form.reset();
        self.notification.dismiss();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
