//! Period summary rows and their store.

use std::collections::BTreeMap;

use closebooks_shared::types::{AccountCode, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A general-ledger row: one account's aggregated activity for one period.
///
/// Ending balance is debits minus credits: positive means a debit balance,
/// negative a credit balance. Derived entirely from transactions dated in
/// the period; never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The account this row aggregates.
    pub account: AccountCode,
    /// The fiscal period.
    pub period: Period,
    /// Sum of debit lines in the period.
    pub total_debits: Decimal,
    /// Sum of credit lines in the period.
    pub total_credits: Decimal,
    /// Ending balance (debits - credits).
    pub ending_balance: Decimal,
}

/// Store of period summary rows, keyed by (period, account).
#[derive(Debug, Clone, Default)]
pub struct SummaryStore {
    rows: BTreeMap<(Period, AccountCode), PeriodSummary>,
}

impl SummaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every row for the period with the given rows.
    ///
    /// Removing stale rows first means accounts that had activity on a prior
    /// run but none now do not linger.
    pub fn replace_period(&mut self, period: Period, rows: Vec<PeriodSummary>) {
        self.rows.retain(|(p, _), _| *p != period);
        for row in rows {
            self.rows.insert((period, row.account.clone()), row);
        }
    }

    /// Looks up the row for an account in a period.
    #[must_use]
    pub fn get(&self, period: Period, account: &AccountCode) -> Option<&PeriodSummary> {
        self.rows.get(&(period, account.clone()))
    }

    /// Returns the rows for a period in account order.
    #[must_use]
    pub fn rows_for(&self, period: Period) -> Vec<&PeriodSummary> {
        self.rows
            .iter()
            .filter(|((p, _), _)| *p == period)
            .map(|(_, row)| row)
            .collect()
    }

    /// Iterates every row in (period, account) order.
    pub fn iter(&self) -> impl Iterator<Item = &PeriodSummary> {
        self.rows.values()
    }

    /// Sums total debits and credits across every summary row.
    #[must_use]
    pub fn totals(&self) -> (Decimal, Decimal) {
        self.rows.values().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(debits, credits), row| (debits + row.total_debits, credits + row.total_credits),
        )
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
