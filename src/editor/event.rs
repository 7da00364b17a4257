//! Everything that can happen to an edit form, and what the host should do next

use std::fmt;

use crate::models::{AccountId, Rgb};

use super::EditorError;

/// Free-text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Label,
    Description,
    Amount,
}

/// List selectors of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Currency,
    AccountType,
    Color,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Currency => write!(f, "currency"),
            Self::AccountType => write!(f, "account type"),
            Self::Color => write!(f, "color"),
        }
    }
}

/// Entries of the form's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    SetSortKey,
    ToggleExcludeFromTotals,
    PickColor,
    Save,
    Cancel,
}

/// Result of the sort-key dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    Submitted(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    FieldChanged { field: TextField, value: String },
    SelectionChanged { selector: Selector, index: usize },
    SignToggled,
    /// The custom color picker closed; `None` when nothing was chosen
    ColorPicked(Option<Rgb>),
    SortKeyEntered(DialogResult),
    /// Answer to the discard confirmation
    DiscardConfirmed(bool),
    Menu(MenuCommand),
}

/// What the sort-key dialog should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKeyRequest {
    pub title: &'static str,
    pub current: String,
    pub max_len: usize,
}

/// Menu as it should currently be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub exclude_from_totals_checked: bool,
    /// False once the session has ended; every entry is then inert
    pub enabled: bool,
}

/// What the host must do after an event was handled
#[derive(Debug)]
pub enum EditorOutcome {
    /// The form changed; redraw it
    Updated,
    /// Nothing happened
    Ignored,
    OpenSortKeyDialog(SortKeyRequest),
    OpenColorPicker { current: Rgb },
    ConfirmDiscard { message: &'static str },
    /// The account was persisted; close the form with this id
    Saved(AccountId),
    /// The edit was abandoned; close the form without a result
    Discarded,
    /// The event was refused; show the error and keep the form open
    Rejected(EditorError),
}

impl EditorOutcome {
    /// True when the host should close the form
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Saved(_) | Self::Discarded)
    }
}
