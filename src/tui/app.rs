//! Application state for the TUI
//!
//! The App struct owns the edit form and everything the terminal front end
//! keeps around it: focus and text buffers, the open dialog, and pending
//! notifications.

use std::sync::Arc;

use crate::editor::{AccountEditForm, EditorError, EditorEvent, EditorOutcome, ValidationError};
use crate::models::AccountId;
use crate::services::AccountService;
use crate::tasks::TaskRunner;

use super::dialogs::account::{AccountField, AccountFormState};
use super::dialogs::color_picker::ColorPickerState;
use super::dialogs::sort_key::SortKeyDialogState;
use super::widgets::notification::{Notification, NotificationQueue};

/// The form as the terminal front end drives it
pub type EditorForm<'a> = AccountEditForm<Arc<AccountService>, &'a TaskRunner>;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    SortKey(SortKeyDialogState),
    ColorPicker(ColorPickerState),
    ConfirmDiscard(&'static str),
}

/// How the editor was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    Saved(AccountId),
    Cancelled,
}

/// Main application state
pub struct App<'a> {
    pub form: EditorForm<'a>,

    /// Source of background write completions
    pub runner: &'a TaskRunner,

    /// Focus and text buffers of the form
    pub account_form: AccountFormState,

    pub active_dialog: ActiveDialog,

    pub notifications: NotificationQueue,

    /// Set once the form has closed
    pub exit: Option<EditorExit>,
}

impl<'a> App<'a> {
    pub fn new(form: EditorForm<'a>, runner: &'a TaskRunner) -> Self {
        let account_form = AccountFormState::from_form(&form);
        Self {
            form,
            runner,
            account_form,
            active_dialog: ActiveDialog::None,
            notifications: NotificationQueue::default(),
            exit: None,
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Hand an event to the form and act on the outcome
    pub fn dispatch(&mut self, event: EditorEvent) {
        let outcome = self.form.handle_event(event);
        if outcome.is_final() {
            self.close_dialog();
        }
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: EditorOutcome) {
        match outcome {
            EditorOutcome::Updated | EditorOutcome::Ignored => {}
            EditorOutcome::OpenSortKeyDialog(request) => {
                self.open_dialog(ActiveDialog::SortKey(SortKeyDialogState::new(&request)));
            }
            EditorOutcome::OpenColorPicker { current } => {
                self.open_dialog(ActiveDialog::ColorPicker(ColorPickerState::new(current)));
            }
            EditorOutcome::ConfirmDiscard { message } => {
                self.open_dialog(ActiveDialog::ConfirmDiscard(message));
            }
            EditorOutcome::Saved(id) => self.exit = Some(EditorExit::Saved(id)),
            EditorOutcome::Discarded => self.exit = Some(EditorExit::Cancelled),
            EditorOutcome::Rejected(err) => self.report_rejection(err),
        }
    }

    fn report_rejection(&mut self, err: EditorError) {
        if matches!(err, EditorError::Validation(ValidationError::MissingLabel)) {
            // Shown inline under the label instead
            self.account_form.set_focus(AccountField::Label);
            return;
        }
        self.notifications.push(Notification::for_rejection(&err));
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
        for completion in self.runner.poll_completions() {
            if let Some(notification) = Notification::for_completion(&completion) {
                self.notifications.push(notification);
            }
        }
    }

    /// The terminal was resized and the form will be laid out again
    pub fn on_resize(&mut self) {
        self.form.rebuild_palette();
    }
}
