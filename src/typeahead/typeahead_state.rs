use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{PopupId, SuggestionList, filter_candidates};
use crate::input::{FieldId, TextField};
use crate::layout::PointerTarget;
use crate::symbols::CandidateSet;

/// Whether a key press was taken by the typeahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
    /// The key belongs to the typeahead; the host must not act on it
    Consumed,
    /// Not a typeahead key; the host handles it as usual
    Ignored,
}

/// Count of popups created and destroyed over a controller's life
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupLedger {
    pub opened: u64,
    pub closed: u64,
}

impl PopupLedger {
    pub fn live(&self) -> u64 {
        self.opened - self.closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavKey {
    Down,
    Up,
    Confirm,
}

impl NavKey {
    fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Enter => Some(NavKey::Confirm),
            _ => None,
        }
    }
}

/// Typeahead controller bound to a single field
#[derive(Debug)]
pub struct Typeahead {
    field: FieldId,
    candidates: CandidateSet,
    popup: Option<SuggestionList>,
    generation: u64,
    ledger: PopupLedger,
}

impl Typeahead {
    pub fn attach(field: &TextField, candidates: CandidateSet) -> Self {
        log::debug!(
            "Typeahead attached to {} ({}) with {} candidates",
            field.id(),
            field.label(),
            candidates.len()
        );
        Self {
            field: field.id(),
            candidates,
            popup: None,
            generation: 0,
            ledger: PopupLedger::default(),
        }
    }

    /// Close any open popup and release the field
    pub fn detach(mut self) -> FieldId {
        self.close();
        log::debug!("Typeahead detached from {}", self.field);
        self.field
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn popup(&self) -> Option<&SuggestionList> {
        self.popup.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.popup.as_ref().and_then(SuggestionList::cursor)
    }

    pub fn ledger(&self) -> PopupLedger {
        self.ledger
    }

    pub fn owns(&self, popup: PopupId) -> bool {
        self.popup.as_ref().is_some_and(|p| p.id() == popup)
    }

    /// Rebuild the popup for the field's new content
    pub fn on_query_change(&mut self, query: &str) {
        self.close();
        if query.is_empty() {
            return;
        }

        let items = filter_candidates(&self.candidates, query);
        if items.is_empty() {
            log::debug!("No candidates match {:?}", query);
            return;
        }

        self.generation += 1;
        let list = SuggestionList::new(PopupId::new(self.field, self.generation), items);
        log::debug!(
            "Popup {} opened for {}: {} matches for {:?}",
            self.generation,
            self.field,
            list.len(),
            query
        );
        self.popup = Some(list);
        self.ledger.opened += 1;
    }

    /// Handle a key press while the bound field has focus
    pub fn on_key_down(&mut self, key: &KeyEvent, field: &mut TextField) -> KeyHandling {
        let Some(nav) = NavKey::from_key(key) else {
            return KeyHandling::Ignored;
        };

        match nav {
            NavKey::Down => {
                if let Some(popup) = &mut self.popup {
                    popup.move_down();
                }
            }
            NavKey::Up => {
                if let Some(popup) = &mut self.popup {
                    popup.move_up();
                }
            }
            NavKey::Confirm => {
                if let Some(index) = self.cursor() {
                    self.select(index, field);
                }
            }
        }

        KeyHandling::Consumed
    }

    /// Commit the item at `index` into the field and close the popup.
    /// Returns false when there is no such item.
    pub fn select(&mut self, index: usize, field: &mut TextField) -> bool {
        if field.id() != self.field {
            return false;
        }
        let Some(value) = self
            .popup
            .as_ref()
            .and_then(|popup| popup.items().get(index))
            .map(|item| item.value().to_string())
        else {
            return false;
        };

        field.set_value(&value);
        self.close();
        true
    }

    /// Item press handler. Runs before the page-wide handler.
    pub fn on_pointer_select(&mut self, target: PointerTarget, field: &mut TextField) -> bool {
        match target {
            PointerTarget::Item(popup, index) if self.owns(popup) => self.select(index, field),
            _ => false,
        }
    }

    /// Page-wide press handler: close unless the press landed exactly on the
    /// bound field or exactly on this popup's container.
    pub fn on_outside_interaction(&mut self, target: PointerTarget) {
        let Some(popup) = &self.popup else {
            return;
        };

        let inside = match target {
            PointerTarget::Field(id) => id == self.field,
            PointerTarget::Popup(id) => id == popup.id(),
            _ => false,
        };

        if !inside {
            self.close();
        }
    }

    pub fn close(&mut self) {
        if let Some(popup) = self.popup.take() {
            self.ledger.closed += 1;
            log::debug!("Popup {:?} closed", popup.id());
        }
    }
}

#[cfg(test)]
#[path = "typeahead_state_tests.rs"]
mod typeahead_state_tests;
