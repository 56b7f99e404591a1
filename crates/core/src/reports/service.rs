//! Report generation service.

use std::collections::BTreeMap;

use closebooks_shared::types::{AccountCode, Period};
use rust_decimal::Decimal;
use tracing::warn;

use crate::directory::{AccountType, ChartOfAccounts};
use crate::ledger::LedgerStore;
use crate::period::SummaryStore;

use super::types::{
    BalanceSheet, FinancialStatements, IncomeStatement, TrialBalanceReport, TrialBalanceRow,
    TrialBalanceTotals,
};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance report.
    ///
    /// With a period, account totals come from the period summaries; without
    /// one, totals are recomputed over the full transaction history. Either
    /// way every active account gets a row - accounts with no activity show
    /// zero balances (left-join semantics).
    #[must_use]
    pub fn trial_balance(
        chart: &ChartOfAccounts,
        ledger: &LedgerStore,
        summaries: &SummaryStore,
        period: Option<Period>,
    ) -> TrialBalanceReport {
        let history = period.is_none().then(|| Self::history_totals(ledger));

        let rows: Vec<TrialBalanceRow> = chart
            .active()
            .map(|account| {
                let (debits, credits) = match period {
                    Some(p) => summaries
                        .get(p, &account.code)
                        .map_or((Decimal::ZERO, Decimal::ZERO), |row| {
                            (row.total_debits, row.total_credits)
                        }),
                    None => history
                        .as_ref()
                        .and_then(|totals| totals.get(&account.code).copied())
                        .unwrap_or((Decimal::ZERO, Decimal::ZERO)),
                };
                TrialBalanceRow::from_totals(
                    account.code.clone(),
                    account.name.clone(),
                    account.account_type,
                    debits,
                    credits,
                )
            })
            .collect();

        let total_debits: Decimal = rows.iter().map(|r| r.total_debits).sum();
        let total_credits: Decimal = rows.iter().map(|r| r.total_credits).sum();

        TrialBalanceReport {
            period,
            rows,
            totals: TrialBalanceTotals {
                total_debits,
                total_credits,
                is_balanced: total_debits == total_credits,
            },
        }
    }

    /// Generates the income statement and balance sheet over full history.
    ///
    /// Asserts the accounting equation (assets = liabilities + equity, with
    /// net income folded into equity). A violation is reported in the
    /// `is_balanced` flag and logged loudly - it means the ledger data is
    /// inconsistent, not that the report failed.
    #[must_use]
    pub fn financial_statements(
        chart: &ChartOfAccounts,
        ledger: &LedgerStore,
        tolerance: Decimal,
    ) -> FinancialStatements {
        let mut revenue = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        let mut assets = Decimal::ZERO;
        let mut liabilities = Decimal::ZERO;
        let mut equity = Decimal::ZERO;

        for transaction in ledger.iter() {
            for line in &transaction.lines {
                let Some(account) = chart.get(&line.account) else {
                    // Orphaned lines are the quality checker's concern.
                    continue;
                };
                match account.account_type {
                    AccountType::Revenue => revenue += line.credit_amount(),
                    AccountType::Expense => expenses += line.debit_amount(),
                    AccountType::Asset => {
                        assets += line.debit_amount() - line.credit_amount();
                    }
                    AccountType::Liability => {
                        liabilities += line.credit_amount() - line.debit_amount();
                    }
                    AccountType::Equity => {
                        equity += line.credit_amount() - line.debit_amount();
                    }
                }
            }
        }

        let net_income = revenue - expenses;
        let total_equity = equity + net_income;
        let is_balanced = (assets - (liabilities + total_equity)).abs() <= tolerance;

        if !is_balanced {
            warn!(
                %assets,
                %liabilities,
                %total_equity,
                "balance sheet does not balance: ledger data is inconsistent"
            );
        }

        FinancialStatements {
            income_statement: IncomeStatement {
                revenue,
                expenses,
                net_income,
            },
            balance_sheet: BalanceSheet {
                assets,
                liabilities,
                equity: total_equity,
                is_balanced,
            },
        }
    }

    /// Folds every posted line into per-account (debits, credits) totals.
    fn history_totals(ledger: &LedgerStore) -> BTreeMap<AccountCode, (Decimal, Decimal)> {
        let mut totals: BTreeMap<AccountCode, (Decimal, Decimal)> = BTreeMap::new();
        for transaction in ledger.iter() {
            for line in &transaction.lines {
                let entry = totals
                    .entry(line.account.clone())
                    .or_insert((Decimal::ZERO, Decimal::ZERO));
                entry.0 += line.debit_amount();
                entry.1 += line.credit_amount();
            }
        }
        totals
    }
}
