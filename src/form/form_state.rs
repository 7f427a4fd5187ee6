use std::fmt;

use crate::input::{FieldId, TextField};

/// Clickable form buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Reset,
}

impl fmt::Display for FormButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormButton::Submit => write!(f, "Submit"),
            FormButton::Reset => write!(f, "Reset"),
        }
    }
}

pub struct TradeForm {
    pub symbol: TextField,
    pub quantity: TextField,
    pub price: TextField,
    focus: FieldId,
}

impl TradeForm {
    pub fn new() -> Self {
        let symbol = TextField::new("Symbol");
        let focus = symbol.id();
        Self {
            symbol,
            quantity: TextField::new("Quantity"),
            price: TextField::new("Price"),
            focus,
        }
    }

    /// Fields in tab order
    pub fn fields(&self) -> [&TextField; 3] {
        [&self.symbol, &self.quantity, &self.price]
    }

    pub fn field(&self, id: FieldId) -> Option<&TextField> {
        self.fields().into_iter().find(|field| field.id() == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        [&mut self.symbol, &mut self.quantity, &mut self.price]
            .into_iter()
            .find(|field| field.id() == id)
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    /// Move focus to `id`. Ignored if the field is not part of this form.
    pub fn set_focus(&mut self, id: FieldId) {
        if self.field(id).is_some() {
            self.focus = id;
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        let focus = self.focus;
        if self.quantity.id() == focus {
            &mut self.quantity
        } else if self.price.id() == focus {
            &mut self.price
        } else {
            &mut self.symbol
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(2);
    }

    fn step_focus(&mut self, step: usize) {
        let ids = self.fields().map(TextField::id);
        let current = ids.iter().position(|id| *id == self.focus).unwrap_or(0);
        self.focus = ids[(current + step) % ids.len()];
    }

    /// Clear the symbol, quantity and price fields
    pub fn reset(&mut self) {
        self.symbol.clear();
        self.quantity.clear();
        self.price.clear();
    }
}

impl Default for TradeForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
