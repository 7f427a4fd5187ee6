use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::form::FormButton;
use crate::layout::{PointerTarget, target_at};
use crate::typeahead::KeyHandling;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let target = target_at(&self.regions, mouse.column, mouse.row);
                handle_click(self, target);
            }
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_field_key(key);
    }

    /// Handle keys that work regardless of the focused field.
    /// Returns true if key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            // Close the focused field's popup first, quit once nothing is open
            KeyCode::Esc => {
                let focus = self.form.focus();
                match self
                    .typeaheads
                    .iter_mut()
                    .find(|t| t.field() == focus && t.is_open())
                {
                    Some(typeahead) => typeahead.close(),
                    None => self.should_quit = true,
                }
            }
            // Same as pressing the Reset button, popups included
            KeyCode::Char('r') if ctrl => {
                handle_click(self, PointerTarget::Button(FormButton::Reset))
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ => return false,
        }
        true
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let focus = self.form.focus();

        if let Some(typeahead) = self.typeaheads.iter_mut().find(|t| t.field() == focus) {
            let field = self.form.focused_mut();
            if typeahead.on_key_down(&key, field) == KeyHandling::Ignored && field.input(key) {
                typeahead.on_query_change(field.value());
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            // Single-line fields: nothing to move between
            KeyCode::Up | KeyCode::Down => {}
            _ => {
                self.form.focused_mut().input(key);
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let focus = self.form.focus();
        let field = self.form.focused_mut();
        if !field.paste(text) {
            return;
        }
        if let Some(typeahead) = self.typeaheads.iter_mut().find(|t| t.field() == focus) {
            typeahead.on_query_change(field.value());
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
