//! Diagnostics collector
//!
//! Internal-consistency problems that the editor can survive (a menu built
//! for a closed session, an out-of-range selection) are written here instead
//! of aborting the screen.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AccountEditorResult;

use super::logger::{append_json_line, read_json_lines};

/// One reported inconsistency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub timestamp: DateTime<Utc>,
    /// Where the problem was noticed (e.g. "menu")
    pub context: String,
    pub message: String,
}

/// Collects diagnostic reports, optionally persisting them as JSON lines
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    log_path: Option<PathBuf>,
}

impl Diagnostics {
    /// Collector that appends to `log_path`
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path: Some(log_path),
        }
    }

    /// Collector that only returns reports to the caller
    pub fn in_memory() -> Self {
        Self { log_path: None }
    }

    /// Record an inconsistency
    ///
    /// Write failures are swallowed; diagnostics must never take the editor
    /// down with them.
    pub fn report(&self, context: &str, message: impl Into<String>) -> DiagnosticReport {
        let report = DiagnosticReport {
            timestamp: Utc::now(),
            context: context.to_string(),
            message: message.into(),
        };
        if let Some(path) = &self.log_path {
            let _ = append_json_line(path, &report);
        }
        report
    }

    /// Read back every persisted report
    pub fn read_all(&self) -> AccountEditorResult<Vec<DiagnosticReport>> {
        match &self.log_path {
            Some(path) => read_json_lines(path),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_is_persisted() {
        let temp = TempDir::new().unwrap();
        let diagnostics = Diagnostics::new(temp.path().join("diagnostics.log"));

        let report = diagnostics.report("menu", "session already closed");
        assert_eq!(report.context, "menu");

        let stored = diagnostics.read_all().unwrap();
        assert_eq!(stored, vec![report]);
    }

    #[test]
    fn test_in_memory_collector() {
        let diagnostics = Diagnostics::in_memory();
        let report = diagnostics.report("palette", "selection out of range");
        assert_eq!(report.message, "selection out of range");
        assert!(diagnostics.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_path_does_not_fail() {
        let temp = TempDir::new().unwrap();
        let diagnostics = Diagnostics::new(temp.path().join("missing").join("diagnostics.log"));
        diagnostics.report("menu", "still returns");
    }
}
