//! The account edit form
//!
//! `AccountEditForm` owns one draft account for the lifetime of an edit
//! session. Front ends feed it `EditorEvent`s and act on the returned
//! `EditorOutcome`; persistence and background writes go through the
//! `AccountStore` and `TaskSubmitter` seams.

pub mod amount;
pub mod draft;
pub mod event;
pub mod form;
pub mod palette;
pub mod selector;

pub use amount::{AmountFormat, AmountParseError};
pub use draft::EditDraft;
pub use event::{
    DialogResult, EditorEvent, EditorOutcome, MenuCommand, MenuState, Selector, SortKeyRequest,
    TextField,
};
pub use form::{AccountEditForm, AmountSign, EditorConfig, SessionState};
pub use palette::ColorPalette;
pub use selector::SelectionTable;

use thiserror::Error;

use crate::error::AccountEditorError;
use crate::models::{AccountId, Currency};

/// Input the form refuses to save
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(AmountParseError),

    #[error("{0} is not supported on this system. Please select a different currency.")]
    UnsupportedCurrency(Currency),

    #[error("Label is required")]
    MissingLabel,
}

/// Errors reported by the edit form
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Account {0} could not be loaded")]
    LoadFailure(AccountId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("'{0}' is not a valid sort key")]
    SortKeyParse(String),

    #[error("No {selector} option at position {index}")]
    SelectionOutOfRange { selector: Selector, index: usize },

    #[error("The edit session is already {0}")]
    SessionClosed(SessionState),

    #[error(transparent)]
    Storage(#[from] AccountEditorError),
}

impl EditorError {
    /// True for errors the user can fix by changing the input
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation(_) | Self::SortKeyParse(_) | Self::SelectionOutOfRange { .. } => true,
            Self::Storage(err) => err.is_validation(),
            Self::LoadFailure(_) | Self::SessionClosed(_) => false,
        }
    }
}
