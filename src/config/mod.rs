//! Configuration module for the account editor
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (default currency, number format)

pub mod paths;
pub mod settings;

pub use paths::EditorPaths;
pub use settings::{LocaleSettings, Settings};
