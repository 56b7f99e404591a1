//! Reconciliation data types.

use chrono::{DateTime, NaiveDate, Utc};
use closebooks_shared::types::{AccountCode, Period, ReconciliationId, TransactionRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line from an external bank or counterparty statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    /// Statement line date (decides period membership).
    pub date: NaiveDate,
    /// Statement line description.
    pub description: String,
    /// Signed amount as reported by the statement.
    pub amount: Decimal,
    /// Ledger transaction reference, if the statement carries one.
    ///
    /// `None` means the line cannot match any book transaction and will be
    /// classified statement-only.
    pub transaction_ref: Option<TransactionRef>,
    /// Cleared flag as reported by the external source.
    ///
    /// Carried through verbatim; matching is by reference only.
    pub cleared: bool,
}

impl StatementLine {
    /// Creates a cleared statement line with no transaction reference.
    #[must_use]
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            transaction_ref: None,
            cleared: true,
        }
    }

    /// Attaches the ledger transaction reference.
    #[must_use]
    pub fn with_ref(mut self, reference: impl Into<TransactionRef>) -> Self {
        self.transaction_ref = Some(reference.into());
        self
    }

    /// Marks the line as not yet cleared by the external source.
    #[must_use]
    pub fn uncleared(mut self) -> Self {
        self.cleared = false;
        self
    }
}

/// The outcome of reconciling one account for one period.
///
/// Adjusted balances move each side toward the other: statement-only items
/// are added to the book balance, outstanding items subtracted from the
/// statement balance. Variance is the remaining unexplained difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRecord {
    /// Unique record identifier.
    pub id: ReconciliationId,
    /// The account reconciled.
    pub account: AccountCode,
    /// The fiscal period reconciled.
    pub period: Period,
    /// When the reconciliation completed.
    pub completed_at: DateTime<Utc>,
    /// Actor that ran the reconciliation.
    pub completed_by: String,
    /// Ending balance per the posted period summary.
    pub book_balance: Decimal,
    /// Sum of in-period statement line amounts.
    pub statement_balance: Decimal,
    /// Book transactions with no matching statement line.
    pub outstanding_count: usize,
    /// Net signed amount of outstanding transactions.
    pub outstanding_amount: Decimal,
    /// Statement lines with no matching book transaction.
    pub statement_only_count: usize,
    /// Sum of statement-only line amounts.
    pub statement_only_amount: Decimal,
    /// Book balance plus statement-only amount.
    pub adjusted_book_balance: Decimal,
    /// Statement balance minus outstanding amount.
    pub adjusted_statement_balance: Decimal,
    /// Adjusted book minus adjusted statement.
    pub variance: Decimal,
    /// Whether the variance fell within tolerance.
    pub reconciled: bool,
}
