//! Account editor
//!
//! This library implements the edit form for a single ledger account: the
//! form state machine, its color palette and selectors, and the terminal
//! front end that drives it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Account record, currencies, colors, money
//! - `storage`: JSON file storage layer and the `AccountStore` seam
//! - `services`: Validated, audited account writes
//! - `audit`: Audit log and diagnostics collector
//! - `tasks`: Fire-and-forget background writes
//! - `editor`: The `AccountEditForm` state machine
//! - `tui`: Terminal rendering and key handling
//!
//! # Example
//!
//! ```rust,ignore
//! use account_editor::config::{paths::EditorPaths, settings::Settings};
//!
//! let paths = EditorPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tasks;
pub mod tui;

pub use error::AccountEditorError;
