//! Terminal User Interface module
//!
//! Draws the account edit form with ratatui and feeds it key presses.
//! Sort key, custom color and discard confirmation are modal dialogs over
//! the form.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{App, EditorExit};
pub use terminal::run_tui;
