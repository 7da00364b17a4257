//! Dialog modules for the TUI

pub mod account;
pub mod color_picker;
pub mod confirm;
pub mod sort_key;
