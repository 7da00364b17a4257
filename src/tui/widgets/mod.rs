//! Reusable widgets for the TUI

pub mod input;
pub mod notification;
pub mod swatch;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationWidget, Severity};
pub use swatch::{palette_spans, swatch_color};
