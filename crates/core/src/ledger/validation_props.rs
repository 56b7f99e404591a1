//! Property tests for posting validation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::directory::{Account, AccountType, ChartOfAccounts};
use crate::ledger::line::Line;
use crate::ledger::store::LedgerStore;
use crate::ledger::transaction::TransactionInput;
use crate::ledger::validation::validate_shape;

/// Strategy for positive cent amounts up to 1,000,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a balanced line set: n debit amounts mirrored by one credit
/// covering the total.
fn balanced_lines_strategy() -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(amount_strategy(), 1..=6).prop_map(|debits| {
        let total: Decimal = debits.iter().copied().sum();
        let mut lines: Vec<Line> = debits
            .into_iter()
            .map(|amount| Line::debit("1000", amount))
            .collect();
        lines.push(Line::credit("4000", total));
        lines
    })
}

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

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any balanced line set with positive amounts passes shape validation.
    #[test]
    fn prop_balanced_lines_validate(lines in balanced_lines_strategy()) {
        prop_assert!(validate_shape(&"TXN-P".into(), &lines).is_ok());
    }

    /// Perturbing the credit side by any non-zero delta is rejected with the
    /// exact totals in the error.
    #[test]
    fn prop_unbalanced_lines_rejected(
        lines in balanced_lines_strategy(),
        delta_cents in 1i64..10_000i64,
    ) {
        let mut lines = lines;
        let last = lines.len() - 1;
        lines[last].amount += Decimal::new(delta_cents, 2);

        let result = validate_shape(&"TXN-P".into(), &lines);
        let is_unbalanced = matches!(
            result,
            Err(crate::ledger::PostError::Unbalanced { .. })
        );
        prop_assert!(is_unbalanced);
    }

    /// Every transaction the store accepts keeps store-wide debits equal to
    /// store-wide credits, exactly.
    #[test]
    fn prop_store_totals_stay_balanced(
        batches in prop::collection::vec(balanced_lines_strategy(), 1..10)
    ) {
        let chart = chart();
        let mut store = LedgerStore::new();

        for (i, lines) in batches.into_iter().enumerate() {
            let input = TransactionInput {
                reference: format!("TXN-{i:06}").into(),
                date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
                description: "prop".to_string(),
                lines,
            };
            store.post(input, &chart, Utc::now(), "prop").unwrap();
        }

        let (debits, credits) = store.totals();
        prop_assert_eq!(debits, credits);
    }
}
