//! Text field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use super::TextField;

/// Render a field with its label as the border title
pub fn render_field(field: &mut TextField, focused: bool, frame: &mut Frame, area: Rect) {
    // Set border color - cyan when focused, gray when unfocused
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    field.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(border_color)),
    );

    // Only the focused field shows a cursor
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    field.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&field.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
