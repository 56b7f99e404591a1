//! Reconciliation errors.

use closebooks_shared::error::StoreError;
use closebooks_shared::types::{AccountCode, Period};
use thiserror::Error;

/// Reasons a reconciliation cannot run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The account is not registered in the chart of accounts.
    #[error("account {0} is not registered")]
    UnknownAccount(AccountCode),

    /// The period has no summary row for the account.
    ///
    /// Reconciliation takes its book balance from the aggregated summary, so
    /// the period must be posted first.
    #[error("no posted summary for account {account} in period {period}")]
    SummaryMissing {
        /// The account being reconciled.
        account: AccountCode,
        /// The period that was never aggregated.
        period: Period,
    },

    /// Underlying storage failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ReconcileError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAccount(_) => "RECON_UNKNOWN_ACCOUNT",
            Self::SummaryMissing { .. } => "RECON_SUMMARY_MISSING",
            Self::Storage(e) => e.error_code(),
        }
    }
}
