//! Common types used across the engine.

pub mod code;
pub mod id;
pub mod period;

pub use code::{AccountCode, TransactionRef};
pub use id::{AuditEntryId, ReconciliationId};
pub use period::Period;
