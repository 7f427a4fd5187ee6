use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{NotificationKind, NotificationState};

const DEFAULT_HINT: &str = " ↑/↓ choose  Enter pick  Tab next  ^R reset  Esc quit";

/// Render the current notification, or the key hint when there is none
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let line = match state.current() {
        Some(notification) => {
            let color = match notification.kind {
                NotificationKind::Info => Color::Green,
                NotificationKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {}", notification.message),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            DEFAULT_HINT,
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
