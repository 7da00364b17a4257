//! JSON file helpers
//!
//! Reads tolerate a missing file; writes go through a sibling temp file and
//! a rename so a crash never leaves a half-written account file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AccountEditorError;

/// Read JSON from `path`, or `T::default()` when the file does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, AccountEditorError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        AccountEditorError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AccountEditorError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write `data` as pretty JSON, replacing `path` atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), AccountEditorError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AccountEditorError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        AccountEditorError::Storage(format!("Failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| AccountEditorError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| AccountEditorError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AccountEditorError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AccountEditorError::Storage(format!("Failed to rename temp file: {}", e))
    })
}
