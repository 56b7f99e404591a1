//! Property tests for period aggregation.

use chrono::{NaiveDate, Utc};
use closebooks_shared::types::Period;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::directory::{Account, AccountType, ChartOfAccounts};
use crate::ledger::{LedgerStore, Line, TransactionInput};

use super::aggregator::aggregate;
use super::summary::SummaryStore;

const ACCOUNTS: [(&str, &str, AccountType); 4] = [
    ("1000", "Cash", AccountType::Asset),
    ("1100", "Accounts Receivable", AccountType::Asset),
    ("4000", "Revenue", AccountType::Revenue),
    ("6000", "Operating Expenses", AccountType::Expense),
];

fn chart() -> ChartOfAccounts {
    let mut chart = ChartOfAccounts::new();
    for (code, name, account_type) in ACCOUNTS {
        chart.register(Account::new(code, name, account_type)).unwrap();
    }
    chart
}

/// One generated posting: (debit account idx, credit account idx, cents, day).
type GeneratedPosting = (usize, usize, i64, u32);

fn posting_strategy() -> impl Strategy<Value = GeneratedPosting> {
    (0usize..4, 0usize..4, 1i64..10_000_000i64, 1u32..29)
}

fn ledger_from(postings: &[GeneratedPosting], month: u32) -> LedgerStore {
    let chart = chart();
    let mut store = LedgerStore::new();
    for (i, &(debit_idx, credit_idx, cents, day)) in postings.iter().enumerate() {
        let amount = Decimal::new(cents, 2);
        let input = TransactionInput {
            reference: format!("TXN-{i:06}").into(),
            date: NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
            description: "prop".to_string(),
            lines: vec![
                Line::debit(ACCOUNTS[debit_idx].0, amount),
                Line::credit(ACCOUNTS[credit_idx].0, amount),
            ],
        };
        store.post(input, &chart, Utc::now(), "prop").unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Summary totals equal source totals for the period, and summary debits
    /// equal summary credits when every transaction is fully posted.
    #[test]
    fn prop_aggregation_conserves_totals(
        postings in prop::collection::vec(posting_strategy(), 1..30)
    ) {
        let store = ledger_from(&postings, 7);
        let july = Period::new(2026, 7).unwrap();

        let rows = aggregate(&store, july);
        let summary_debits: Decimal = rows.iter().map(|r| r.total_debits).sum();
        let summary_credits: Decimal = rows.iter().map(|r| r.total_credits).sum();
        let (source_debits, source_credits) = store.totals();

        prop_assert_eq!(summary_debits, source_debits);
        prop_assert_eq!(summary_credits, source_credits);
        prop_assert_eq!(summary_debits, summary_credits);
    }

    /// Two consecutive runs with unchanged source data produce identical rows
    /// in the store.
    #[test]
    fn prop_aggregation_idempotent(
        postings in prop::collection::vec(posting_strategy(), 1..20)
    ) {
        let store = ledger_from(&postings, 7);
        let july = Period::new(2026, 7).unwrap();

        let mut summaries = SummaryStore::new();
        summaries.replace_period(july, aggregate(&store, july));
        let first: Vec<_> = summaries.iter().cloned().collect();

        summaries.replace_period(july, aggregate(&store, july));
        let second: Vec<_> = summaries.iter().cloned().collect();

        prop_assert_eq!(first, second);
    }

    /// Aggregating a period never picks up transactions dated outside it.
    #[test]
    fn prop_aggregation_excludes_other_periods(
        july_postings in prop::collection::vec(posting_strategy(), 1..10),
        august_postings in prop::collection::vec(posting_strategy(), 1..10),
    ) {
        let chart = chart();
        let mut store = LedgerStore::new();
        let mut seq = 0usize;
        for (month, postings) in [(7u32, &july_postings), (8u32, &august_postings)] {
            for &(debit_idx, credit_idx, cents, day) in postings {
                let amount = Decimal::new(cents, 2);
                let input = TransactionInput {
                    reference: format!("TXN-{seq:06}").into(),
                    date: NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
                    description: "prop".to_string(),
                    lines: vec![
                        Line::debit(ACCOUNTS[debit_idx].0, amount),
                        Line::credit(ACCOUNTS[credit_idx].0, amount),
                    ],
                };
                store.post(input, &chart, Utc::now(), "prop").unwrap();
                seq += 1;
            }
        }

        let july_total: Decimal = july_postings.iter().map(|&(_, _, cents, _)| Decimal::new(cents, 2)).sum();
        let rows = aggregate(&store, Period::new(2026, 7).unwrap());
        let summary_debits: Decimal = rows.iter().map(|r| r.total_debits).sum();
        prop_assert_eq!(summary_debits, july_total);
    }
}
