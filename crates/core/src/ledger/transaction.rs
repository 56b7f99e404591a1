//! Transaction aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use closebooks_shared::types::{AccountCode, TransactionRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::Line;

/// Input for posting a new transaction.
///
/// The reference is assigned by the posting source and must be unique in the
/// ledger; corrections are made by posting an offsetting transaction, never
/// by editing a posted one.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    /// Unique transaction reference.
    pub reference: TransactionRef,
    /// Transaction date (decides fiscal period membership).
    pub date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// The lines (must have at least 2 and balance exactly).
    pub lines: Vec<Line>,
}

/// A posted, immutable transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction reference.
    pub reference: TransactionRef,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// When the transaction was committed to the store.
    pub posted_at: DateTime<Utc>,
    /// Actor that posted the transaction.
    pub posted_by: String,
    /// The balanced lines.
    pub lines: Vec<Line>,
}

impl Transaction {
    /// Sums the debit side of all lines.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.lines.iter().map(Line::debit_amount).sum()
    }

    /// Sums the credit side of all lines.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.lines.iter().map(Line::credit_amount).sum()
    }

    /// Returns true if any line posts to the given account.
    #[must_use]
    pub fn touches(&self, account: &AccountCode) -> bool {
        self.lines.iter().any(|l| &l.account == account)
    }

    /// Sums the signed amounts of lines posting to the given account.
    #[must_use]
    pub fn net_amount_for(&self, account: &AccountCode) -> Decimal {
        self.lines
            .iter()
            .filter(|l| &l.account == account)
            .map(Line::signed_amount)
            .sum()
    }
}
