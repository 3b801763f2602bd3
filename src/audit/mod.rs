//! Audit logging for the expense tracker
//!
//! When enabled in settings, every added expense is appended to a
//! line-delimited JSON log (JSONL) next to the data file.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::added(&expense, store.len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::{AuditHistory, AuditLogger};
