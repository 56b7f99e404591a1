//! Append-only transaction store.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use closebooks_shared::types::{AccountCode, Period, TransactionRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::directory::ChartOfAccounts;

use super::error::PostError;
use super::transaction::{Transaction, TransactionInput};
use super::validation::{validate_accounts, validate_shape};

/// Optional inclusive date bounds for activity queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    /// Earliest date to include.
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Returns true if the date falls within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// A single account's view of one transaction line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountActivity {
    /// The transaction the line belongs to.
    pub reference: TransactionRef,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Debit amount (zero for credit lines).
    pub debit: Decimal,
    /// Credit amount (zero for debit lines).
    pub credit: Decimal,
    /// Signed net amount (debit - credit).
    pub net: Decimal,
}

/// Append-only collection of balanced transactions.
///
/// A transaction is visible to readers only once fully posted; a rejected
/// posting leaves the store untouched. Posted transactions are immutable.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    by_reference: HashMap<TransactionRef, usize>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and persists a transaction atomically.
    ///
    /// Validation order: structural shape, account resolution, reference
    /// uniqueness. Nothing is written until every check passes.
    ///
    /// # Errors
    ///
    /// Returns a `PostError` naming the offending line or reference.
    pub fn post(
        &mut self,
        input: TransactionInput,
        chart: &ChartOfAccounts,
        posted_at: DateTime<Utc>,
        posted_by: &str,
    ) -> Result<&Transaction, PostError> {
        validate_shape(&input.reference, &input.lines)?;
        validate_accounts(&input.reference, &input.lines, chart)?;

        if self.by_reference.contains_key(&input.reference) {
            return Err(PostError::DuplicateTransaction(input.reference));
        }

        let transaction = Transaction {
            reference: input.reference,
            date: input.date,
            description: input.description,
            posted_at,
            posted_by: posted_by.to_string(),
            lines: input.lines,
        };

        self.by_reference
            .insert(transaction.reference.clone(), self.transactions.len());
        self.transactions.push(transaction);
        // Index and vec were updated together; last element is the new txn.
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Builds a store from raw transactions, bypassing validation.
    ///
    /// Only for tests that need corrupt data the posting path would reject.
    #[cfg(test)]
    pub(crate) fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let by_reference = transactions
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.reference.clone(), idx))
            .collect();
        Self {
            transactions,
            by_reference,
        }
    }

    /// Looks up a transaction by reference.
    #[must_use]
    pub fn get(&self, reference: &TransactionRef) -> Option<&Transaction> {
        self.by_reference
            .get(reference)
            .map(|&idx| &self.transactions[idx])
    }

    /// Returns true if a transaction with the reference is posted.
    #[must_use]
    pub fn contains(&self, reference: &TransactionRef) -> bool {
        self.by_reference.contains_key(reference)
    }

    /// Iterates all transactions in posting order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Iterates transactions dated within the fiscal period.
    pub fn in_period(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| period.contains(t.date))
    }

    /// Returns the date-ordered activity for one account.
    ///
    /// The result is a finite snapshot, ordered by (date, reference), and can
    /// be re-iterated freely.
    #[must_use]
    pub fn activity(&self, account: &AccountCode, range: DateRange) -> Vec<AccountActivity> {
        let mut rows: Vec<AccountActivity> = self
            .transactions
            .iter()
            .filter(|t| range.contains(t.date))
            .flat_map(|t| {
                t.lines
                    .iter()
                    .filter(|l| &l.account == account)
                    .map(|l| AccountActivity {
                        reference: t.reference.clone(),
                        date: t.date,
                        description: t.description.clone(),
                        debit: l.debit_amount(),
                        credit: l.credit_amount(),
                        net: l.signed_amount(),
                    })
            })
            .collect();
        rows.sort_by(|a, b| (a.date, &a.reference).cmp(&(b.date, &b.reference)));
        rows
    }

    /// Sums total debits and credits across every posted transaction.
    #[must_use]
    pub fn totals(&self) -> (Decimal, Decimal) {
        self.transactions.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(debits, credits), txn| (debits + txn.total_debits(), credits + txn.total_credits()),
        )
    }

    /// Returns the number of posted transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if no transactions are posted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Account, AccountType};
    use crate::ledger::line::Line;
    use rust_decimal_macros::dec;

    fn chart() -> ChartOfAccounts {
        let mut chart = ChartOfAccounts::new();
        chart
            .register(Account::new("1000", "Cash", AccountType::Asset))
            .unwrap();
        chart
            .register(Account::new("4000", "Revenue", AccountType::Revenue))
            .unwrap();
        chart
    }

    fn input(reference: &str, day: u32, amount: Decimal) -> TransactionInput {
        TransactionInput {
            reference: reference.into(),
            date: NaiveDate::from_ymd_opt(2026, 7, day).unwrap(),
            description: format!("Sale {reference}"),
            lines: vec![Line::debit("1000", amount), Line::credit("4000", amount)],
        }
    }

    fn post(store: &mut LedgerStore, chart: &ChartOfAccounts, i: TransactionInput) {
        store.post(i, chart, Utc::now(), "tester").unwrap();
    }

    #[test]
    fn test_post_and_get() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, input("TXN-1", 10, dec!(100.00)));

        let txn = store.get(&"TXN-1".into()).unwrap();
        assert_eq!(txn.total_debits(), dec!(100.00));
        assert_eq!(txn.posted_by, "tester");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_reference_leaves_store_unchanged() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, input("TXN-1", 10, dec!(100.00)));

        let result = store.post(input("TXN-1", 11, dec!(50.00)), &chart, Utc::now(), "tester");
        assert!(matches!(result, Err(PostError::DuplicateTransaction(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.totals(), (dec!(100.00), dec!(100.00)));
    }

    #[test]
    fn test_rejected_posting_writes_nothing() {
        let chart = chart();
        let mut store = LedgerStore::new();
        let bad = TransactionInput {
            reference: "TXN-BAD".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            description: "Unbalanced".to_string(),
            lines: vec![
                Line::debit("1000", dec!(100.00)),
                Line::credit("4000", dec!(90.00)),
            ],
        };
        assert!(store.post(bad, &chart, Utc::now(), "tester").is_err());
        assert!(store.is_empty());
        assert!(!store.contains(&"TXN-BAD".into()));
    }

    #[test]
    fn test_in_period_filters_by_date_only() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, input("TXN-1", 10, dec!(100.00)));
        post(&mut store, &chart, input("TXN-2", 31, dec!(25.00)));

        let august = TransactionInput {
            reference: "TXN-3".into(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            description: "August sale".to_string(),
            lines: vec![
                Line::debit("1000", dec!(10.00)),
                Line::credit("4000", dec!(10.00)),
            ],
        };
        post(&mut store, &chart, august);

        let july = Period::new(2026, 7).unwrap();
        let refs: Vec<_> = store.in_period(july).map(|t| t.reference.as_str()).collect();
        assert_eq!(refs, vec!["TXN-1", "TXN-2"]);
    }

    #[test]
    fn test_activity_is_date_ordered_and_restartable() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, input("TXN-2", 20, dec!(50.00)));
        post(&mut store, &chart, input("TXN-1", 5, dec!(100.00)));

        let rows = store.activity(&"1000".into(), DateRange::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reference.as_str(), "TXN-1");
        assert_eq!(rows[1].reference.as_str(), "TXN-2");
        assert_eq!(rows[0].net, dec!(100.00));

        // Snapshot can be iterated again.
        assert_eq!(rows.iter().count(), 2);
    }

    #[test]
    fn test_activity_respects_date_range() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, input("TXN-1", 5, dec!(100.00)));
        post(&mut store, &chart, input("TXN-2", 20, dec!(50.00)));

        let range = DateRange {
            from: Some(NaiveDate::from_ymd_opt(2026, 7, 10).unwrap()),
            to: None,
        };
        let rows = store.activity(&"1000".into(), range);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reference.as_str(), "TXN-2");
    }
}
