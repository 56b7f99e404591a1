//! Reconciliation computation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use closebooks_shared::types::{AccountCode, Period, ReconciliationId, TransactionRef};
use rust_decimal::Decimal;
use tracing::info;

use crate::directory::ChartOfAccounts;
use crate::ledger::LedgerStore;
use crate::period::SummaryStore;

use super::error::ReconcileError;
use super::types::{ReconciliationRecord, StatementLine};

/// Service that reconciles one account for one period.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Reconciles the account's book activity against statement lines.
    ///
    /// The book balance comes from the posted period summary; statement lines
    /// outside the period are ignored. Book transactions are matched to
    /// statement lines by exact transaction reference. Unmatched book
    /// transactions are outstanding; unmatched statement lines (including
    /// those carrying no reference) are statement-only.
    ///
    /// # Errors
    ///
    /// `UnknownAccount` if the account is not registered; `SummaryMissing` if
    /// the period was never aggregated for this account.
    #[allow(clippy::too_many_arguments)]
    pub fn reconcile(
        chart: &ChartOfAccounts,
        ledger: &LedgerStore,
        summaries: &SummaryStore,
        account: &AccountCode,
        period: Period,
        statement_lines: &[StatementLine],
        tolerance: Decimal,
        completed_at: DateTime<Utc>,
        completed_by: &str,
    ) -> Result<ReconciliationRecord, ReconcileError> {
        if !chart.contains(account) {
            return Err(ReconcileError::UnknownAccount(account.clone()));
        }
        let summary = summaries.get(period, account).ok_or_else(|| {
            ReconcileError::SummaryMissing {
                account: account.clone(),
                period,
            }
        })?;
        let book_balance = summary.ending_balance;

        let in_period: Vec<&StatementLine> = statement_lines
            .iter()
            .filter(|l| period.contains(l.date))
            .collect();
        let statement_balance: Decimal = in_period.iter().map(|l| l.amount).sum();

        let statement_refs: HashSet<&TransactionRef> = in_period
            .iter()
            .filter_map(|l| l.transaction_ref.as_ref())
            .collect();

        let book_transactions: Vec<_> = ledger
            .in_period(period)
            .filter(|t| t.touches(account))
            .collect();
        let book_refs: HashSet<&TransactionRef> =
            book_transactions.iter().map(|t| &t.reference).collect();

        let mut outstanding_count = 0usize;
        let mut outstanding_amount = Decimal::ZERO;
        for transaction in &book_transactions {
            if !statement_refs.contains(&transaction.reference) {
                outstanding_count += 1;
                outstanding_amount += transaction.net_amount_for(account);
            }
        }

        let mut statement_only_count = 0usize;
        let mut statement_only_amount = Decimal::ZERO;
        for line in &in_period {
            let matched = line
                .transaction_ref
                .as_ref()
                .is_some_and(|r| book_refs.contains(r));
            if !matched {
                statement_only_count += 1;
                statement_only_amount += line.amount;
            }
        }

        let adjusted_book_balance = book_balance + statement_only_amount;
        let adjusted_statement_balance = statement_balance - outstanding_amount;
        let variance = adjusted_book_balance - adjusted_statement_balance;
        let reconciled = variance.abs() <= tolerance;

        info!(
            account = %account,
            period = %period,
            %variance,
            reconciled,
            outstanding_count,
            statement_only_count,
            "reconciliation completed"
        );

        Ok(ReconciliationRecord {
            id: ReconciliationId::new(),
            account: account.clone(),
            period,
            completed_at,
            completed_by: completed_by.to_string(),
            book_balance,
            statement_balance,
            outstanding_count,
            outstanding_amount,
            statement_only_count,
            statement_only_amount,
            adjusted_book_balance,
            adjusted_statement_balance,
            variance,
            reconciled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Account, AccountType};
    use crate::ledger::{Line, TransactionInput};
    use crate::period::aggregate;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const TOLERANCE: Decimal = dec!(0.01);

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

    fn post(store: &mut LedgerStore, chart: &ChartOfAccounts, reference: &str, day: u32, amount: Decimal) {
        let input = TransactionInput {
            reference: reference.into(),
            date: NaiveDate::from_ymd_opt(2026, 7, day).unwrap(),
            description: format!("Receipt {reference}"),
            lines: vec![Line::debit("1000", amount), Line::credit("4000", amount)],
        };
        store.post(input, chart, Utc::now(), "tester").unwrap();
    }

    fn summaries(store: &LedgerStore, period: Period) -> SummaryStore {
        let mut summaries = SummaryStore::new();
        summaries.replace_period(period, aggregate(store, period));
        summaries
    }

    #[test]
    fn test_worked_example_one_outstanding() {
        // Book 10,000.00 across two receipts; the bank saw only the first.
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, "TXN-1", 5, dec!(9700.00));
        post(&mut store, &chart, "TXN-2", 28, dec!(300.00));
        let july = Period::new(2026, 7).unwrap();
        let summaries = summaries(&store, july);

        let lines = vec![StatementLine::new(
            NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
            "Deposit",
            dec!(9700.00),
        )
        .with_ref("TXN-1")];

        let record = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"1000".into(),
            july,
            &lines,
            TOLERANCE,
            Utc::now(),
            "tester",
        )
        .unwrap();

        assert_eq!(record.book_balance, dec!(10000.00));
        assert_eq!(record.statement_balance, dec!(9700.00));
        assert_eq!(record.outstanding_count, 1);
        assert_eq!(record.outstanding_amount, dec!(300.00));
        assert_eq!(record.statement_only_count, 0);
        assert_eq!(record.adjusted_book_balance, dec!(10000.00));
        assert_eq!(record.adjusted_statement_balance, dec!(9400.00));
        assert_eq!(record.variance, dec!(600.00));
        assert!(!record.reconciled);
    }

    #[test]
    fn test_fully_matched_reconciles() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, "TXN-1", 5, dec!(250.00));
        post(&mut store, &chart, "TXN-2", 18, dec!(125.50));
        let july = Period::new(2026, 7).unwrap();
        let summaries = summaries(&store, july);

        let lines = vec![
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
                "Deposit",
                dec!(250.00),
            )
            .with_ref("TXN-1"),
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 7, 19).unwrap(),
                "Deposit",
                dec!(125.50),
            )
            .with_ref("TXN-2"),
        ];

        let record = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"1000".into(),
            july,
            &lines,
            TOLERANCE,
            Utc::now(),
            "tester",
        )
        .unwrap();

        assert_eq!(record.outstanding_count, 0);
        assert_eq!(record.statement_only_count, 0);
        // With nothing unmatched, variance is exactly book minus statement.
        assert_eq!(record.variance, record.book_balance - record.statement_balance);
        assert_eq!(record.variance, dec!(0.00));
        assert!(record.reconciled);
    }

    #[test]
    fn test_statement_only_lines_adjust_book_side() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, "TXN-1", 5, dec!(500.00));
        let july = Period::new(2026, 7).unwrap();
        let summaries = summaries(&store, july);

        let lines = vec![
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
                "Deposit",
                dec!(500.00),
            )
            .with_ref("TXN-1"),
            // Bank fee the books never saw; no reference to match.
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
                "Service fee",
                dec!(-15.00),
            ),
        ];

        let record = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"1000".into(),
            july,
            &lines,
            TOLERANCE,
            Utc::now(),
            "tester",
        )
        .unwrap();

        assert_eq!(record.statement_only_count, 1);
        assert_eq!(record.statement_only_amount, dec!(-15.00));
        assert_eq!(record.adjusted_book_balance, dec!(485.00));
        assert_eq!(record.adjusted_statement_balance, dec!(485.00));
        assert!(record.reconciled);
    }

    #[test]
    fn test_out_of_period_statement_lines_ignored() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, "TXN-1", 5, dec!(100.00));
        let july = Period::new(2026, 7).unwrap();
        let summaries = summaries(&store, july);

        let lines = vec![
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
                "Deposit",
                dec!(100.00),
            )
            .with_ref("TXN-1"),
            StatementLine::new(
                NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                "August deposit",
                dec!(9999.00),
            ),
        ];

        let record = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"1000".into(),
            july,
            &lines,
            TOLERANCE,
            Utc::now(),
            "tester",
        )
        .unwrap();

        assert_eq!(record.statement_balance, dec!(100.00));
        assert_eq!(record.statement_only_count, 0);
    }

    #[test]
    fn test_summary_missing_is_an_error() {
        let chart = chart();
        let mut store = LedgerStore::new();
        post(&mut store, &chart, "TXN-1", 5, dec!(100.00));
        let july = Period::new(2026, 7).unwrap();
        // Period never aggregated.
        let summaries = SummaryStore::new();

        let result = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"1000".into(),
            july,
            &[],
            TOLERANCE,
            Utc::now(),
            "tester",
        );
        assert!(matches!(
            result,
            Err(ReconcileError::SummaryMissing { .. })
        ));
    }

    #[test]
    fn test_unknown_account_is_an_error() {
        let chart = chart();
        let store = LedgerStore::new();
        let july = Period::new(2026, 7).unwrap();
        let summaries = SummaryStore::new();

        let result = ReconciliationService::reconcile(
            &chart,
            &store,
            &summaries,
            &"9999".into(),
            july,
            &[],
            TOLERANCE,
            Utc::now(),
            "tester",
        );
        assert!(matches!(result, Err(ReconcileError::UnknownAccount(_))));
    }
}
