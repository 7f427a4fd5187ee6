use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::form::form_render::{FORM_HEIGHT, render_form};
use crate::notification::render_notification;
use crate::typeahead::typeahead_render::render_popup;

const FORM_WIDTH: u16 = 40;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(FORM_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);

        let form_area = Rect {
            width: body_area.width.min(FORM_WIDTH),
            height: body_area.height.min(FORM_HEIGHT),
            ..body_area
        };
        render_form(&mut self.form, frame, form_area, &mut self.regions);

        if body_area.width > FORM_WIDTH {
            let holdings_area = Rect {
                x: form_area.x + FORM_WIDTH,
                width: body_area.width - FORM_WIDTH,
                ..form_area
            };
            self.render_holdings(frame, holdings_area);
        }

        // Popups go last so they draw over the fields below them, but stay
        // clear of the status line
        let popup_bounds = header_area.union(body_area);
        let max_visible = self.typeahead_config.window_height();
        for typeahead in &self.typeaheads {
            if let Some(field_area) = self.regions.field_area(typeahead.field()) {
                render_popup(
                    typeahead,
                    frame,
                    popup_bounds,
                    field_area,
                    max_visible,
                    &mut self.regions,
                );
            }
        }

        render_notification(frame, &self.notification, status_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " Trade ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " {} symbols, {} orders, {} holdings",
                    self.candidates.len(),
                    self.orders().len(),
                    self.portfolio().len()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_holdings(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Holdings ");

        let lines: Vec<Line> = if self.portfolio().is_empty() {
            vec![Line::styled("none", Style::default().fg(Color::DarkGray))]
        } else {
            self.portfolio()
                .holdings()
                .iter()
                .map(|holding| {
                    Line::from(vec![
                        Span::styled(
                            holding.symbol.as_str(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" {} @ {:.2}", holding.quantity, holding.price)),
                    ])
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
