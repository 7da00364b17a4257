//! Error types for account storage and configuration
//!
//! Form-level errors (`EditorError`, `ValidationError`) live in
//! `crate::editor` and wrap this type when persistence fails.

use thiserror::Error;

use crate::models::AccountId;

/// Failures of the storage, audit and configuration layers
#[derive(Error, Debug)]
pub enum AccountEditorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A record failed `Account::validate` or a field was out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// No stored record has this identifier
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Accounts file unreadable, unwritable, or repository lock poisoned
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AccountEditorError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AccountEditorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AccountEditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for storage and service operations
pub type AccountEditorResult<T> = Result<T, AccountEditorError>;
