//! Event handler for the TUI
//!
//! Routes terminal events to the open dialog, or to the form when no
//! dialog is open.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
        }
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => app.on_resize(),
    }
    Ok(())
}

/// Handle a key event; returns whether it was consumed
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match app.active_dialog {
        ActiveDialog::None => dialogs::account::handle_key(app, key),
        ActiveDialog::SortKey(_) => dialogs::sort_key::handle_key(app, key),
        ActiveDialog::ColorPicker(_) => dialogs::color_picker::handle_key(app, key),
        ActiveDialog::ConfirmDiscard(_) => dialogs::confirm::handle_key(app, key),
    }
}
