//! Append-only audit log.
//!
//! Every state-changing operation records who did what, when, and to which
//! record. Entries are never edited or deleted.

pub mod entry;
pub mod log;

pub use entry::{AuditEntry, AuditEvent};
pub use log::AuditLog;
