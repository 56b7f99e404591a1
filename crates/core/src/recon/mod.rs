//! Book-vs-bank reconciliation.
//!
//! Compares the ledger's view of an account over a fiscal period against an
//! external statement, classifying differences as outstanding (book-only) or
//! statement-only items. Matching is an exact join on transaction reference,
//! never fuzzy. Completed reconciliations are appended to a log; re-running a
//! period appends a fresh record and the newest one wins for reporting.

pub mod error;
pub mod log;
pub mod service;
pub mod types;

pub use error::ReconcileError;
pub use log::ReconciliationLog;
pub use service::ReconciliationService;
pub use types::{ReconciliationRecord, StatementLine};
