//! Append-only JSONL logs
//!
//! Provides the AuditLogger that records account writes. Each entry is
//! written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AccountEditorError, AccountEditorResult};

use super::entry::AuditEntry;

/// Append one value as a JSON line to `path`, creating the file if needed
pub(crate) fn append_json_line<T: Serialize>(path: &Path, value: &T) -> AccountEditorResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AccountEditorError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let json = serde_json::to_string(value)
        .map_err(|e| AccountEditorError::Json(format!("Failed to serialize log entry: {}", e)))?;

    writeln!(file, "{}", json)
        .map_err(|e| AccountEditorError::Io(format!("Failed to write log entry: {}", e)))?;

    file.flush()
        .map_err(|e| AccountEditorError::Io(format!("Failed to flush log: {}", e)))
}

/// Read every JSON line of `path` in file order; a missing file is empty
pub(crate) fn read_json_lines<T: DeserializeOwned>(path: &Path) -> AccountEditorResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| AccountEditorError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut entries = Vec::new();
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            AccountEditorError::Io(format!("Failed to read line {}: {}", line_num + 1, e))
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let entry = serde_json::from_str(&line).map_err(|e| {
            AccountEditorError::Json(format!(
                "Failed to parse entry at line {}: {}",
                line_num + 1,
                e
            ))
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> AccountEditorResult<()> {
        append_json_line(&self.log_path, entry)
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> AccountEditorResult<Vec<AuditEntry>> {
        read_json_lines(&self.log_path)
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
