use std::ops::Range;

use super::SuggestionItem;
use crate::input::FieldId;

/// Identity of one popup instance, scoped to the field that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId {
    owner: FieldId,
    generation: u64,
}

impl PopupId {
    pub(super) fn new(owner: FieldId, generation: u64) -> Self {
        Self { owner, generation }
    }

    pub fn owner(&self) -> FieldId {
        self.owner
    }
}

/// The open popup: matched items plus the keyboard cursor
#[derive(Debug, Clone)]
pub struct SuggestionList {
    id: PopupId,
    items: Vec<SuggestionItem>,
    cursor: Option<usize>,
}

impl SuggestionList {
    pub(super) fn new(id: PopupId, items: Vec<SuggestionItem>) -> Self {
        Self {
            id,
            items,
            cursor: None,
        }
    }

    pub fn id(&self) -> PopupId {
        self.id
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The item under the cursor. Only this item carries the highlight.
    pub fn highlighted(&self) -> Option<&SuggestionItem> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.cursor == Some(index)
    }

    /// Advance the cursor, wrapping from the last item to the first
    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = self.cursor.map_or(0, |i| i + 1);
        self.cursor = Some(if next >= self.items.len() { 0 } else { next });
    }

    /// Step the cursor back, wrapping from the first item to the last.
    /// An unset cursor also lands on the last item.
    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = Some(match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => last,
        });
    }

    /// Range of items to draw in a window of `height` rows, keeping the
    /// cursor in view
    pub fn visible_window(&self, height: usize) -> Range<usize> {
        let len = self.items.len();
        if len <= height {
            return 0..len;
        }
        let cursor = self.cursor.unwrap_or(0);
        let start = (cursor + 1).saturating_sub(height);
        start..start + height
    }
}

#[cfg(test)]
#[path = "suggestion_list_tests.rs"]
mod suggestion_list_tests;
