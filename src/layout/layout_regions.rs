use ratatui::layout::Rect;

use crate::form::FormButton;
use crate::input::FieldId;
use crate::typeahead::PopupId;

/// What a pointer press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A text field
    Field(FieldId),
    /// A popup's container: its border or an empty row
    Popup(PopupId),
    /// A suggestion row inside a popup, by item index
    Item(PopupId, usize),
    Button(FormButton),
    Elsewhere,
}

/// Screen area of a drawn popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupRegion {
    pub id: PopupId,
    /// Outer area including the border
    pub area: Rect,
    /// Area holding the item rows
    pub items_area: Rect,
    /// Item index drawn on the first row
    pub first_index: usize,
    /// Number of item rows drawn
    pub item_count: usize,
}

/// Regions recorded during the last render, in draw order
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub fields: Vec<(FieldId, Rect)>,
    pub buttons: Vec<(FormButton, Rect)>,
    pub popups: Vec<PopupRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.buttons.clear();
        self.popups.clear();
    }

    pub fn add_field(&mut self, id: FieldId, area: Rect) {
        self.fields.push((id, area));
    }

    pub fn add_button(&mut self, button: FormButton, area: Rect) {
        self.buttons.push((button, area));
    }

    pub fn add_popup(&mut self, region: PopupRegion) {
        self.popups.push(region);
    }

    pub fn field_area(&self, id: FieldId) -> Option<Rect> {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, area)| *area)
    }
}
