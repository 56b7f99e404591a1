//! Business rule validation for transaction posting.
//!
//! Amounts are `Decimal`, so the balance invariant is checked exactly; there
//! is no floating-point epsilon anywhere in the posting path.

use closebooks_shared::types::TransactionRef;
use rust_decimal::Decimal;

use crate::directory::ChartOfAccounts;

use super::error::PostError;
use super::line::{EntryType, Line};

/// Validates the structural shape of a set of lines.
///
/// A transaction needs at least two lines, both sides present, every amount
/// positive, and debits equal to credits exactly. Arbitrary multi-line
/// transactions are allowed; the strict two-line convention is only an
/// advisory quality check, never enforced here.
///
/// # Errors
///
/// Returns the first violated rule with the offending amounts.
pub fn validate_shape(reference: &TransactionRef, lines: &[Line]) -> Result<(), PostError> {
    if lines.is_empty() {
        return Err(PostError::NoLines(reference.clone()));
    }
    if lines.len() < 2 {
        return Err(PostError::InsufficientLines {
            reference: reference.clone(),
            lines: lines.len(),
        });
    }

    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    let mut has_debit = false;
    let mut has_credit = false;

    for line in lines {
        if line.amount <= Decimal::ZERO {
            return Err(PostError::NonPositiveAmount {
                reference: reference.clone(),
                account: line.account.clone(),
                amount: line.amount,
            });
        }

        match line.entry_type {
            EntryType::Debit => {
                total_debits += line.amount;
                has_debit = true;
            }
            EntryType::Credit => {
                total_credits += line.amount;
                has_credit = true;
            }
        }
    }

    if !has_debit || !has_credit {
        return Err(PostError::SingleSided(reference.clone()));
    }

    if total_debits != total_credits {
        return Err(PostError::Unbalanced {
            reference: reference.clone(),
            debits: total_debits,
            credits: total_credits,
        });
    }

    Ok(())
}

/// Validates that every line resolves to an active directory account.
///
/// # Errors
///
/// Returns `UnknownAccount` or `InactiveAccount` for the first line that
/// fails to resolve.
pub fn validate_accounts(
    reference: &TransactionRef,
    lines: &[Line],
    chart: &ChartOfAccounts,
) -> Result<(), PostError> {
    for line in lines {
        match chart.get(&line.account) {
            None => {
                return Err(PostError::UnknownAccount {
                    reference: reference.clone(),
                    account: line.account.clone(),
                });
            }
            Some(account) if !account.is_active => {
                return Err(PostError::InactiveAccount {
                    reference: reference.clone(),
                    account: line.account.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
