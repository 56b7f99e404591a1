//! Report data types.

use closebooks_shared::types::{AccountCode, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::directory::AccountType;

/// One account's row in a trial balance.
///
/// Ending balance is debits minus credits; a positive ending balance is
/// reported in the debit column, a negative one (as a positive number) in
/// the credit column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account code.
    pub account: AccountCode,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Total debit amount.
    pub total_debits: Decimal,
    /// Total credit amount.
    pub total_credits: Decimal,
    /// Ending balance (debits - credits).
    pub ending_balance: Decimal,
    /// Ending balance when it falls on the debit side, else zero.
    pub debit_balance: Decimal,
    /// Ending balance when it falls on the credit side, else zero.
    pub credit_balance: Decimal,
}

impl TrialBalanceRow {
    /// Builds a row from an account's aggregated totals, splitting the
    /// ending balance into its debit/credit column.
    #[must_use]
    pub fn from_totals(
        account: AccountCode,
        name: String,
        account_type: AccountType,
        total_debits: Decimal,
        total_credits: Decimal,
    ) -> Self {
        let ending_balance = total_debits - total_credits;
        let (debit_balance, credit_balance) = if ending_balance >= Decimal::ZERO {
            (ending_balance, Decimal::ZERO)
        } else {
            (Decimal::ZERO, -ending_balance)
        };
        Self {
            account,
            name,
            account_type,
            total_debits,
            total_credits,
            ending_balance,
            debit_balance,
            credit_balance,
        }
    }
}

/// Trial balance grand totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debits across all accounts.
    pub total_debits: Decimal,
    /// Total credits across all accounts.
    pub total_credits: Decimal,
    /// Whether debits equal credits exactly.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// The period reported on, or `None` for full history.
    pub period: Option<Period>,
    /// One row per active account (zero rows included).
    pub rows: Vec<TrialBalanceRow>,
    /// Grand totals.
    pub totals: TrialBalanceTotals,
}

/// Income statement figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Credit amounts posted to Revenue accounts.
    pub revenue: Decimal,
    /// Debit amounts posted to Expense accounts.
    pub expenses: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}

/// Balance sheet figures.
///
/// Net income is folded into equity before the accounting equation is
/// checked. A false `is_balanced` means the ledger itself is inconsistent
/// and is surfaced prominently, never suppressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Net debit balance across Asset accounts.
    pub assets: Decimal,
    /// Net credit balance across Liability accounts.
    pub liabilities: Decimal,
    /// Net credit balance across Equity accounts plus net income.
    pub equity: Decimal,
    /// Whether assets equal liabilities plus equity (within tolerance).
    pub is_balanced: bool,
}

/// Combined financial statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// The income statement.
    pub income_statement: IncomeStatement,
    /// The balance sheet.
    pub balance_sheet: BalanceSheet,
}
