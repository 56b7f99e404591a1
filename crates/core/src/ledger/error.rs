//! Ledger posting error types.

use closebooks_shared::StoreError;
use closebooks_shared::types::{AccountCode, TransactionRef};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can reject a transaction posting.
///
/// All rejects are local validation failures surfaced synchronously with the
/// offending identifiers and amounts; a rejected posting leaves no partial
/// state behind.
#[derive(Debug, Error)]
pub enum PostError {
    // ========== Validation Errors ==========
    /// Transaction has no lines.
    #[error("Transaction {0} has no lines")]
    NoLines(TransactionRef),

    /// Transaction must have at least 2 lines.
    #[error("Transaction {reference} must have at least 2 lines, got {lines}")]
    InsufficientLines {
        /// The offending transaction.
        reference: TransactionRef,
        /// How many lines were supplied.
        lines: usize,
    },

    /// Transaction has only one side (all debits or all credits).
    #[error("Transaction {0} must have both debit and credit lines")]
    SingleSided(TransactionRef),

    /// Line amount is zero or negative.
    #[error("Transaction {reference} has a non-positive amount {amount} on account {account}")]
    NonPositiveAmount {
        /// The offending transaction.
        reference: TransactionRef,
        /// The account on the offending line.
        account: AccountCode,
        /// The rejected amount.
        amount: Decimal,
    },

    /// Transaction is not balanced (debits != credits).
    #[error("Transaction {reference} is unbalanced: debits {debits} != credits {credits}")]
    Unbalanced {
        /// The offending transaction.
        reference: TransactionRef,
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    // ========== Account Errors ==========
    /// A line references an account missing from the directory.
    #[error("Transaction {reference} references unknown account {account}")]
    UnknownAccount {
        /// The offending transaction.
        reference: TransactionRef,
        /// The unresolved account code.
        account: AccountCode,
    },

    /// A line references an inactive account.
    #[error("Transaction {reference} references inactive account {account}")]
    InactiveAccount {
        /// The offending transaction.
        reference: TransactionRef,
        /// The inactive account code.
        account: AccountCode,
    },

    // ========== Identity Errors ==========
    /// A transaction with this reference is already posted.
    #[error("Duplicate transaction reference: {0}")]
    DuplicateTransaction(TransactionRef),

    // ========== Storage Errors ==========
    /// Storage failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl PostError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoLines(_) => "NO_LINES",
            Self::InsufficientLines { .. } => "INSUFFICIENT_LINES",
            Self::SingleSided(_) => "SINGLE_SIDED",
            Self::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            Self::Unbalanced { .. } => "UNBALANCED_TRANSACTION",
            Self::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            Self::InactiveAccount { .. } => "INACTIVE_ACCOUNT",
            Self::DuplicateTransaction(_) => "DUPLICATE_TRANSACTION",
            Self::Storage(err) => err.error_code(),
        }
    }
}
