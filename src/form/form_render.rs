//! Trade form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use super::{FormButton, TradeForm};
use crate::input::input_render::render_field;
use crate::layout::LayoutRegions;

const FIELD_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

/// Total rows the form needs
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 3 + 1;

pub fn render_form(form: &mut TradeForm, frame: &mut Frame, area: Rect, regions: &mut LayoutRegions) {
    let rows = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
    ])
    .split(area);

    let focus = form.focus();
    for (field, row) in [&mut form.symbol, &mut form.quantity, &mut form.price]
        .into_iter()
        .zip(rows.iter())
    {
        let focused = field.id() == focus;
        render_field(field, focused, frame, *row);
        regions.add_field(field.id(), *row);
    }

    render_buttons(frame, rows[3], regions);
}

fn render_buttons(frame: &mut Frame, area: Rect, regions: &mut LayoutRegions) {
    let mut x = area.x;
    for button in [FormButton::Submit, FormButton::Reset] {
        let label = format!("[ {} ]", button);
        let width = (label.len() as u16).min((area.x + area.width).saturating_sub(x));
        let button_area = Rect::new(x, area.y, width, area.height.min(1));

        let style = match button {
            FormButton::Submit => Style::default().fg(Color::Green),
            FormButton::Reset => Style::default().fg(Color::Yellow),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style.add_modifier(Modifier::BOLD))),
            button_area,
        );
        regions.add_button(button, button_area);

        x = (x + width + BUTTON_GAP).min(area.x + area.width);
    }
}

#[cfg(test)]
#[path = "form_render_tests.rs"]
mod form_render_tests;
