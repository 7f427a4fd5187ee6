//! Typeahead popup rendering
//!
//! Draws the open suggestion list below its field and records where it was
//! drawn so pointer presses can be resolved to items.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{SuggestionItem, Typeahead};
use crate::layout::{LayoutRegions, PopupRegion};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const HIGHLIGHT_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";

/// Render the typeahead's popup, if open, anchored to `field_area` and kept
/// inside `bounds`
pub fn render_popup(
    typeahead: &Typeahead,
    frame: &mut Frame,
    bounds: Rect,
    field_area: Rect,
    max_visible: usize,
    regions: &mut LayoutRegions,
) {
    let Some(list) = typeahead.popup() else {
        return;
    };

    // Place first: the window must only hold rows that fit on screen
    let wanted_rows = u16::try_from(list.len().min(max_visible.max(1))).unwrap_or(u16::MAX);
    let slot = popup::popup_below_anchor(
        bounds,
        field_area,
        field_area.width,
        wanted_rows.saturating_add(POPUP_BORDER_HEIGHT),
    );
    let rows = slot.height.saturating_sub(POPUP_BORDER_HEIGHT);
    if rows == 0 {
        return;
    }

    let window = list.visible_window(usize::from(rows));
    let visible = &list.items()[window.clone()];

    let text_width = visible
        .iter()
        .map(|item| item.value().width())
        .max()
        .unwrap_or(0);
    let content_width = (text_width + PLAIN_MARKER.width()) as u16 + POPUP_BORDER_WIDTH;
    let popup_width = content_width.max(field_area.width);
    let popup_height = visible.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(bounds, field_area, popup_width, popup_height);

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(offset, item)| suggestion_row(item, list.is_highlighted(window.start + offset)))
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    if list.len() > visible.len() {
        let position = list.cursor().map_or(0, |c| c + 1);
        block = block.title_bottom(
            Line::from(format!(" {}/{} ", position, list.len())).right_aligned(),
        );
    }

    let items_area = block.inner(popup_area);
    regions.add_popup(PopupRegion {
        id: list.id(),
        area: popup_area,
        items_area,
        first_index: window.start,
        item_count: visible.len().min(usize::from(items_area.height)),
    });

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(items).block(block), popup_area);
}

/// One suggestion row: marker, bold matched prefix, plain remainder
fn suggestion_row(item: &SuggestionItem, highlighted: bool) -> ListItem<'_> {
    let (marker, style) = if highlighted {
        (
            HIGHLIGHT_MARKER,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (PLAIN_MARKER, Style::default().fg(Color::White))
    };

    let line = Line::from(vec![
        Span::styled(marker, style),
        Span::styled(item.matched_prefix(), style.add_modifier(Modifier::BOLD)),
        Span::styled(item.remainder(), style),
    ]);

    ListItem::new(line).style(style)
}

#[cfg(test)]
#[path = "typeahead_render_tests.rs"]
mod typeahead_render_tests;
