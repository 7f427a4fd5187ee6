use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, flipping above it when there is
/// more room there. The popup is clamped to `frame_area`.
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let frame_right = frame_area.x + frame_area.width;
    let frame_bottom = frame_area.y + frame_area.height;

    let x = anchor.x.min(frame_right.saturating_sub(1)).max(frame_area.x);
    let width = width.min(frame_right.saturating_sub(x));

    let below_y = (anchor.y + anchor.height).min(frame_bottom);
    let room_below = frame_bottom - below_y;
    let room_above = anchor.y.saturating_sub(frame_area.y);

    if room_below >= height || room_below >= room_above {
        Rect {
            x,
            y: below_y,
            width,
            height: height.min(room_below),
        }
    } else {
        let height = height.min(room_above);
        Rect {
            x,
            y: anchor.y - height,
            width,
            height,
        }
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
