use std::collections::HashMap;

use crate::{
    common::{
        error::{AppError, Rejection},
        money::Money,
    },
    domain::{account::Account, ledger},
};

/// Accounts in seed order, indexed by username.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
}

impl AccountStore {
    /// Builds the store, refusing two accounts that derive the same username
    /// and accounts whose movements overflow the money range.
    pub fn new(accounts: Vec<Account>) -> Result<Self, AppError> {
        if let Some(account) = accounts.iter().find(|a| ledger::turnover(&a.movements).is_none()) {
            return Err(AppError::InvalidSeed {
                owner: account.owner.clone(),
                reason: "movements exceed the money range".into(),
            });
        }
        let mut store = Self {
            accounts,
            index: HashMap::new(),
        };
        store.reindex()?;
        Ok(store)
    }

    fn reindex(&mut self) -> Result<(), AppError> {
        self.index.clear();
        for (pos, account) in self.accounts.iter().enumerate() {
            if self.index.insert(account.username.clone(), pos).is_some() {
                return Err(AppError::DuplicateUsername(account.username.clone()));
            }
        }
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.index.get(username).map(|&pos| &self.accounts[pos])
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        let pos = *self.index.get(username)?;
        self.accounts.get_mut(pos)
    }

    /// Removes the account and keeps the remaining ones in order.
    pub fn remove(&mut self, username: &str) -> Option<Account> {
        let pos = self.index.remove(username)?;
        let removed = self.accounts.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Posts `-amount` to `from` and `+amount` to `to`. Both accounts are
    /// resolved and both legs checked against the money range before either
    /// ledger is touched.
    pub fn post_transfer(&mut self, from: &str, to: &str, amount: Money) -> Result<(), Rejection> {
        let from_pos = *self
            .index
            .get(from)
            .ok_or_else(|| Rejection::UnknownAccount(from.to_string()))?;
        let to_pos = *self
            .index
            .get(to)
            .ok_or_else(|| Rejection::UnknownAccount(to.to_string()))?;
        if from_pos == to_pos {
            return Err(Rejection::SelfTransfer);
        }

        if !self.accounts[from_pos].accepts(-amount) || !self.accounts[to_pos].accepts(amount) {
            return Err(Rejection::AmountTooLarge);
        }

        self.accounts[from_pos].push_movement(-amount)?;
        self.accounts[to_pos].push_movement(amount)?;
        Ok(())
    }
}
