//! Quality findings and the report that carries them.

use closebooks_shared::types::{AccountCode, TransactionRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The data violates a hard invariant.
    Error,
    /// Unusual but acceptable; worth a look.
    Advisory,
}

/// One issue found by the quality checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QualityFinding {
    /// A posted transaction whose debits and credits differ.
    UnbalancedTransaction {
        /// The offending transaction.
        reference: TransactionRef,
        /// Sum of the transaction's debit lines.
        total_debits: Decimal,
        /// Sum of the transaction's credit lines.
        total_credits: Decimal,
    },
    /// Transaction totals disagree with posted summary totals.
    ///
    /// Points at stale or partially-run period aggregation.
    SummaryDrift {
        /// Debit total across all posted transactions.
        transaction_debits: Decimal,
        /// Credit total across all posted transactions.
        transaction_credits: Decimal,
        /// Debit total across all summary rows.
        summary_debits: Decimal,
        /// Credit total across all summary rows.
        summary_credits: Decimal,
    },
    /// A line posts to an account missing from the directory.
    UnknownAccount {
        /// The transaction carrying the line.
        reference: TransactionRef,
        /// The unregistered account code.
        account: AccountCode,
    },
    /// A transaction whose line count departs from the two-line convention.
    UnusualLineCount {
        /// The transaction in question.
        reference: TransactionRef,
        /// Its line count.
        lines: usize,
    },
}

impl QualityFinding {
    /// The finding's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::UnbalancedTransaction { .. }
            | Self::SummaryDrift { .. }
            | Self::UnknownAccount { .. } => Severity::Error,
            Self::UnusualLineCount { .. } => Severity::Advisory,
        }
    }

    /// Returns the finding code for structured reporting.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnbalancedTransaction { .. } => "UNBALANCED_TRANSACTION",
            Self::SummaryDrift { .. } => "SUMMARY_DRIFT",
            Self::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            Self::UnusualLineCount { .. } => "UNUSUAL_LINE_COUNT",
        }
    }
}

/// The full output of one quality run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityReport {
    /// Every finding, in check order.
    pub findings: Vec<QualityFinding>,
}

impl QualityReport {
    /// Returns true if no error-severity findings exist.
    ///
    /// Advisories do not fail a close.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings
            .iter()
            .all(|f| f.severity() != Severity::Error)
    }

    /// Counts error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
            .count()
    }
}
