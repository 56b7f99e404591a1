//! Transaction line domain types.

use closebooks_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type of transaction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

/// A single line in a transaction.
///
/// Each transaction consists of two or more lines that must balance
/// (debits = credits). A line carries one side only; the amount is always
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The account affected by this line.
    pub account: AccountCode,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Amount (must be positive).
    pub amount: Decimal,
    /// Optional memo for this line item.
    pub memo: Option<String>,
}

impl Line {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(account: impl Into<AccountCode>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            entry_type: EntryType::Debit,
            amount,
            memo: None,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account: impl Into<AccountCode>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            entry_type: EntryType::Credit,
            amount,
            memo: None,
        }
    }

    /// Attaches a memo to the line.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Returns the debit amount (zero for credit lines).
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => Decimal::ZERO,
        }
    }

    /// Returns the credit amount (zero for debit lines).
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => Decimal::ZERO,
            EntryType::Credit => self.amount,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}
