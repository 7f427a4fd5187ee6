//! Status line notifications
//!
//! One message at a time, shown on the bottom line until replaced or
//! dismissed.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
