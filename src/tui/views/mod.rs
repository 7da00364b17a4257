//! TUI views
//!
//! The form panel, the status bar, and whatever floats above them.

pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    dialogs::account::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::SortKey(state) => dialogs::sort_key::render(frame, state),
        ActiveDialog::ColorPicker(state) => dialogs::color_picker::render(frame, state),
        ActiveDialog::ConfirmDiscard(message) => dialogs::confirm::render(frame, message),
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}
