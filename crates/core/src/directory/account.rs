//! Account domain types.

use closebooks_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification.
///
/// The five classical account types. The type decides which side of the
/// ledger is the account's normal balance:
/// - Asset/Expense: debit-normal (balance = debits - credits)
/// - Liability/Equity/Revenue: credit-normal (balance = credits - debits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned (cash, receivables, inventory).
    Asset,
    /// Obligations owed (payables, debt).
    Liability,
    /// Owners' residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// Returns true for debit-normal account types.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Calculates the natural-sign balance for this account type.
    #[must_use]
    pub fn natural_balance(self, debits: Decimal, credits: Decimal) -> Decimal {
        if self.is_debit_normal() {
            debits - credits
        } else {
            credits - debits
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A chart of accounts entry.
///
/// The code is unique and immutable once registered. Deactivating an account
/// stops new postings to it; history referencing it remains valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account code.
    pub code: AccountCode,
    /// Display name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent account for hierarchy (no cycles allowed).
    pub parent: Option<AccountCode>,
    /// Whether the account accepts new postings.
    pub is_active: bool,
}

impl Account {
    /// Creates a new active top-level account.
    #[must_use]
    pub fn new(code: impl Into<AccountCode>, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            account_type,
            parent: None,
            is_active: true,
        }
    }

    /// Sets the parent account code.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<AccountCode>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Marks the account inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
