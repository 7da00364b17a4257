//! Worker thread for background account writes
//!
//! Tasks travel to the worker over one channel and completions come back
//! over another, which the UI drains on its own thread.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::error::AccountEditorResult;
use crate::services::AccountService;

use super::{AccountTask, TaskSubmitter};

/// Executes one task on the worker thread
pub trait TaskHandler: Send + 'static {
    fn run(&self, task: &AccountTask) -> AccountEditorResult<()>;
}

impl TaskHandler for Arc<AccountService> {
    fn run(&self, task: &AccountTask) -> AccountEditorResult<()> {
        match *task {
            AccountTask::ToggleExclude { id, value } => self.set_exclude_from_totals(id, value),
            AccountTask::UpdateSortKey { id, value } => self.set_sort_key(id, value),
        }
    }
}

/// Outcome of one task, delivered back to the submitting thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletion {
    pub task: AccountTask,
    /// Error message if the write failed
    pub result: Result<(), String>,
}

impl TaskCompletion {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs submitted tasks one at a time on a dedicated thread
pub struct TaskRunner {
    sender: Option<mpsc::Sender<AccountTask>>,
    completions: mpsc::Receiver<TaskCompletion>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TaskRunner {
    /// Start the worker thread
    pub fn spawn<H: TaskHandler>(handler: H) -> Self {
        let (task_tx, task_rx) = mpsc::channel::<AccountTask>();
        let (done_tx, done_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for task in task_rx {
                let result = handler.run(&task).map_err(|e| e.to_string());
                // The UI may already be gone; its completion is simply dropped
                let _ = done_tx.send(TaskCompletion { task, result });
            }
        });

        Self {
            sender: Some(task_tx),
            completions: done_rx,
            handle: Some(handle),
        }
    }

    /// Drain every completion that has arrived so far (non-blocking)
    pub fn poll_completions(&self) -> Vec<TaskCompletion> {
        self.completions.try_iter().collect()
    }

    /// Stop accepting tasks and wait for the queued ones to finish
    pub fn shutdown(mut self) -> Vec<TaskCompletion> {
        self.stop();
        self.completions.try_iter().collect()
    }

    fn stop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl TaskSubmitter for TaskRunner {
    fn submit(&self, task: AccountTask) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(task);
        }
    }
}

impl Drop for TaskRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
