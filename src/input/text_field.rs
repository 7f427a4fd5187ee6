use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a text field, unique for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(u32);

impl FieldId {
    fn next() -> Self {
        FieldId(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Single-line text input
pub struct TextField {
    id: FieldId,
    label: &'static str,
    pub textarea: TextArea<'static>,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            id: FieldId::next(),
            label,
            textarea: single_line_textarea(String::new()),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Replace the content and leave the cursor at the end.
    ///
    /// Programmatic writes are not edits: callers do not raise a query
    /// change for them.
    pub fn set_value(&mut self, value: &str) {
        self.textarea = single_line_textarea(single_line(value));
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    /// Forward a key press to the editor. Returns true if the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.value().to_string();
        self.textarea.input(key);
        self.collapse_lines();
        self.value() != before
    }

    /// Insert pasted text at the cursor. Returns true if the content changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }

    // Editor keymaps can split the line (Ctrl+M and friends); fold it back.
    fn collapse_lines(&mut self) {
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.set_value(&joined);
        }
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("value", &self.value())
            .finish()
    }
}

fn single_line_textarea(value: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value]);
    textarea.set_cursor_line_style(Style::default());
    textarea
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

#[cfg(test)]
#[path = "text_field_tests.rs"]
mod text_field_tests;
