//! Period aggregation service.

use std::collections::BTreeMap;

use closebooks_shared::types::{AccountCode, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerStore;

use super::summary::PeriodSummary;

/// Outcome of a period posting run.
///
/// An empty period is an informational result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPosting {
    /// The period that was aggregated.
    pub period: Period,
    /// Number of accounts with activity in the period.
    pub accounts: usize,
    /// Sum of all debit lines in the period.
    pub total_debits: Decimal,
    /// Sum of all credit lines in the period.
    pub total_credits: Decimal,
}

/// Computes the summary rows for every account touched in the period.
///
/// Membership is decided purely by transaction date. The result is a full
/// recomputation: feeding it to `SummaryStore::replace_period` makes the run
/// idempotent, and a failed run writes nothing.
#[must_use]
pub fn aggregate(ledger: &LedgerStore, period: Period) -> Vec<PeriodSummary> {
    let mut totals: BTreeMap<AccountCode, (Decimal, Decimal)> = BTreeMap::new();

    for transaction in ledger.in_period(period) {
        for line in &transaction.lines {
            let entry = totals
                .entry(line.account.clone())
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.0 += line.debit_amount();
            entry.1 += line.credit_amount();
        }
    }

    totals
        .into_iter()
        .map(|(account, (debits, credits))| PeriodSummary {
            account,
            period,
            total_debits: debits,
            total_credits: credits,
            ending_balance: debits - credits,
        })
        .collect()
}

impl PeriodPosting {
    /// Builds the posting outcome from freshly computed rows.
    #[must_use]
    pub fn from_rows(period: Period, rows: &[PeriodSummary]) -> Self {
        let total_debits = rows.iter().map(|r| r.total_debits).sum();
        let total_credits = rows.iter().map(|r| r.total_credits).sum();
        Self {
            period,
            accounts: rows.len(),
            total_debits,
            total_credits,
        }
    }
}
