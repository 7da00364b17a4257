//! Audit entry data structures
//!
//! One entry per persisted change to an account: the operation, the account
//! it touched, and before/after snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountId};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Account was inserted
    Create,
    /// Account was modified (full save or a background flag/sort-key write)
    Update,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Identifier of the affected account
    pub account_id: AccountId,

    /// Account label at the time of the operation
    pub label: String,

    /// What triggered the write (e.g. "save", "toggle-exclude")
    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly inserted account
    pub fn create(account: &Account, source: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            account_id: account.id,
            label: account.label.clone(),
            source: source.into(),
            before: None,
            after: serde_json::to_value(account).ok(),
            diff_summary: None,
        }
    }

    /// Entry for a modified account, with a diff of the changed fields
    pub fn update(before: &Account, after: &Account, source: impl Into<String>) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            account_id: after.id,
            label: after.label.clone(),
            source: source.into(),
            before: before_json,
            after: after_json,
            diff_summary,
        }
    }
}
