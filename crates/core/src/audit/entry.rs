//! Audit entry types.

use chrono::{DateTime, Utc};
use closebooks_shared::types::AuditEntryId;
use serde::{Deserialize, Serialize};

/// The kind of state change being audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new account entered the directory.
    AccountRegistered,
    /// A transaction was committed to the ledger.
    TransactionPosted,
    /// A fiscal period was aggregated into summaries.
    PeriodPosted,
    /// A reconciliation run completed.
    ReconciliationCompleted,
}

impl AuditEvent {
    /// Stable event name as written to the log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountRegistered => "account_registered",
            Self::TransactionPosted => "transaction_posted",
            Self::PeriodPosted => "period_posted",
            Self::ReconciliationCompleted => "reconciliation_completed",
        }
    }
}

/// One immutable audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identifier.
    pub id: AuditEntryId,
    /// When the change happened.
    pub at: DateTime<Utc>,
    /// What kind of change.
    pub event: AuditEvent,
    /// The logical table the change touched.
    pub table: String,
    /// Identifier of the affected record, if one exists.
    pub record_id: Option<String>,
    /// JSON snapshot of the record before the change.
    pub old_value: Option<String>,
    /// JSON snapshot of the record after the change.
    pub new_value: Option<String>,
    /// Human-readable summary of the change.
    pub description: String,
    /// Who made the change.
    pub actor: String,
}
