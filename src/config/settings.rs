//! User settings for the account editor
//!
//! Manages the default currency for new accounts, the number format used by
//! amount fields, and the currencies the runtime refuses to handle.

use serde::{Deserialize, Serialize};

use super::paths::EditorPaths;
use crate::error::AccountEditorError;
use crate::models::Currency;

/// Number format for amount input and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// Character separating the integer and fraction parts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Character grouping thousands, `None` to disable grouping
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: Option<char>,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_grouping_separator() -> Option<char> {
    Some(',')
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

/// User settings for the account editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency given to new accounts when no hint is supplied
    #[serde(default)]
    pub default_currency: Currency,

    /// Amount number format
    #[serde(default)]
    pub locale: LocaleSettings,

    /// Currencies the runtime cannot handle; saving with one of these fails
    #[serde(default)]
    pub unsupported_currencies: Vec<Currency>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            locale: LocaleSettings::default(),
            unsupported_currencies: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &EditorPaths) -> Result<Self, AccountEditorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AccountEditorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AccountEditorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EditorPaths) -> Result<(), AccountEditorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AccountEditorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AccountEditorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject number formats that could not be parsed back unambiguously
    pub fn validate(&self) -> Result<(), AccountEditorError> {
        let decimal = self.locale.decimal_separator;
        if decimal.is_ascii_digit() || decimal == '-' {
            return Err(AccountEditorError::Config(format!(
                "Invalid decimal separator: '{}'",
                decimal
            )));
        }
        if let Some(group) = self.locale.grouping_separator {
            if group == decimal || group.is_ascii_digit() || group == '-' {
                return Err(AccountEditorError::Config(format!(
                    "Invalid grouping separator: '{}'",
                    group
                )));
            }
        }
        Ok(())
    }

    /// Whether the runtime can handle the given currency
    pub fn supports_currency(&self, currency: Currency) -> bool {
        !self.unsupported_currencies.contains(&currency)
    }
}
