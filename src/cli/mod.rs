//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer and the
//! terminal form.

pub mod account;

pub use account::{handle_account_command, AccountCommands};
