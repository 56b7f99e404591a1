//! Append-only reconciliation log.

use closebooks_shared::types::{AccountCode, Period};

use super::types::ReconciliationRecord;

/// Append-only history of completed reconciliations.
///
/// Every run is kept; for a given (account, period) the latest record is the
/// one reporting reads.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationLog {
    records: Vec<ReconciliationRecord>,
}

impl ReconciliationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed reconciliation.
    pub fn append(&mut self, record: ReconciliationRecord) {
        self.records.push(record);
    }

    /// Returns the newest record for the account and period, if any.
    #[must_use]
    pub fn latest(&self, account: &AccountCode, period: Period) -> Option<&ReconciliationRecord> {
        self.records
            .iter()
            .rev()
            .find(|r| &r.account == account && r.period == period)
    }

    /// Iterates all records in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &ReconciliationRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no reconciliations have run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
