//! Chart of accounts store.

use std::collections::BTreeMap;

use closebooks_shared::types::AccountCode;

use super::account::Account;
use super::error::DirectoryError;

/// The chart of accounts: all registered accounts keyed by code.
///
/// Only an administrative operation may mutate the chart; every other
/// component has shared read access.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: BTreeMap<AccountCode, Account>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the code is taken, `UnknownParent` if
    /// the parent is not registered, or `HierarchyCycle` if the parent chain
    /// would loop back to this account.
    pub fn register(&mut self, account: Account) -> Result<(), DirectoryError> {
        if self.accounts.contains_key(&account.code) {
            return Err(DirectoryError::DuplicateAccount(account.code));
        }

        if let Some(parent) = &account.parent {
            if parent == &account.code {
                return Err(DirectoryError::HierarchyCycle(account.code));
            }
            if !self.accounts.contains_key(parent) {
                return Err(DirectoryError::UnknownParent {
                    code: account.code,
                    parent: parent.clone(),
                });
            }
            self.check_no_cycle(&account.code, parent)?;
        }

        self.accounts.insert(account.code.clone(), account);
        Ok(())
    }

    /// Walks the parent chain from `start` looking for `code`.
    ///
    /// Parents must pre-exist at registration time, so the chain is finite
    /// unless the chart was corrupted; the walk is bounded by chart size.
    fn check_no_cycle(&self, code: &AccountCode, start: &AccountCode) -> Result<(), DirectoryError> {
        let mut current = Some(start.clone());
        let mut hops = 0usize;
        while let Some(ancestor) = current {
            if &ancestor == code || hops > self.accounts.len() {
                return Err(DirectoryError::HierarchyCycle(code.clone()));
            }
            current = self.accounts.get(&ancestor).and_then(|a| a.parent.clone());
            hops += 1;
        }
        Ok(())
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn get(&self, code: &AccountCode) -> Option<&Account> {
        self.accounts.get(code)
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: &AccountCode) -> bool {
        self.accounts.contains_key(code)
    }

    /// Iterates all accounts in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Iterates active accounts in code order.
    pub fn active(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values().filter(|a| a.is_active)
    }

    /// Returns the number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
