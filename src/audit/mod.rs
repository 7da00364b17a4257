//! Audit logging for the account editor
//!
//! Records every persisted account write with before/after values in an
//! append-only log, and collects internal-consistency diagnostics.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single write (create or update) with snapshots.
//! - `AuditLogger`: appends entries to the audit log as JSON lines.
//! - `generate_diff`: summarizes changed fields between two snapshots.
//! - `Diagnostics`: best-effort collector for recoverable inconsistencies.
//!
//! # Example
//!
//! ```rust,ignore
//! use account_editor::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::update(&before, &after, "save"))?;
//! ```

mod diagnostics;
mod diff;
mod entry;
mod logger;

pub use diagnostics::{DiagnosticReport, Diagnostics};
pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
