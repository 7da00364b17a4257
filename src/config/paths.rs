//! Path management for the account editor
//!
//! Provides XDG-compliant path resolution for configuration, data, and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `ACCOUNT_EDITOR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/account-editor` or `~/.config/account-editor`
//! 3. Windows: `%APPDATA%\account-editor`

use std::path::PathBuf;

use crate::error::AccountEditorError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ACCOUNT_EDITOR_DATA_DIR";

/// Manages all paths used by the account editor
#[derive(Debug, Clone)]
pub struct EditorPaths {
    base_dir: PathBuf,
}

impl EditorPaths {
    /// Create a new EditorPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AccountEditorError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EditorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/account-editor/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostics log
    pub fn diagnostics_log(&self) -> PathBuf {
        self.base_dir.join("diagnostics.log")
    }

    /// Get the path to accounts.json
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AccountEditorError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AccountEditorError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            AccountEditorError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AccountEditorError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("account-editor"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| AccountEditorError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("account-editor"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AccountEditorError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AccountEditorError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("account-editor"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EditorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EditorPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EditorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.accounts_file(),
            temp_dir.path().join("data").join("accounts.json")
        );
    }
}
