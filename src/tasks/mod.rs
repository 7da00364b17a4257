//! Background account writes
//!
//! The edit form hands two small writes (the exclude-from-totals flag and
//! the sort key) to a worker instead of waiting on them. The form only sees
//! the `TaskSubmitter` seam; `TaskRunner` is the threaded implementation.

pub mod runner;

pub use runner::{TaskCompletion, TaskHandler, TaskRunner};

use std::fmt;

use crate::models::AccountId;

/// A fire-and-forget write against a persisted account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTask {
    /// Store the new exclude-from-totals flag
    ToggleExclude { id: AccountId, value: bool },
    /// Store the new sort key
    UpdateSortKey { id: AccountId, value: i32 },
}

impl AccountTask {
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::ToggleExclude { id, .. } | Self::UpdateSortKey { id, .. } => *id,
        }
    }
}

impl fmt::Display for AccountTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleExclude { id, value } => {
                write!(f, "exclude-from-totals={} for account {}", value, id)
            }
            Self::UpdateSortKey { id, value } => {
                write!(f, "sort-key={} for account {}", value, id)
            }
        }
    }
}

/// Task runner collaborator of the edit form
///
/// Submission never blocks and never reports failure to the caller.
pub trait TaskSubmitter {
    fn submit(&self, task: AccountTask);
}

impl<T: TaskSubmitter + ?Sized> TaskSubmitter for &T {
    fn submit(&self, task: AccountTask) {
        (**self).submit(task)
    }
}

impl<T: TaskSubmitter + ?Sized> TaskSubmitter for std::sync::Arc<T> {
    fn submit(&self, task: AccountTask) {
        (**self).submit(task)
    }
}

/// Submitter that remembers every task, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSubmitter {
    tasks: std::cell::RefCell<Vec<AccountTask>>,
}

#[cfg(test)]
impl RecordingSubmitter {
    pub(crate) fn tasks(&self) -> Vec<AccountTask> {
        self.tasks.borrow().clone()
    }
}

#[cfg(test)]
impl TaskSubmitter for RecordingSubmitter {
    fn submit(&self, task: AccountTask) {
        self.tasks.borrow_mut().push(task);
    }
}
