use crate::{
    common::money::Money,
    domain::{account::Account, ledger, transaction::MovementKind},
};

/// One rendered movement. `position` is the 1-based index in the account's
/// stored order and is kept when the rows are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRow {
    pub position: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

impl MovementRow {
    pub fn magnitude(&self) -> Money {
        self.amount.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Money,
    pub deposits: Money,
    pub withdrawals: Money,
    pub interest: Money,
}

impl Summary {
    pub fn of(account: &Account) -> Self {
        let movements = &account.movements;
        Self {
            balance: ledger::balance(movements),
            deposits: ledger::total_deposits(movements),
            withdrawals: ledger::total_withdrawals(movements),
            interest: ledger::qualifying_interest(movements, account.interest_rate),
        }
    }
}

/// Everything the presentation surface needs to draw an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub username: String,
    pub welcome: String,
    pub sorted: bool,
    pub rows: Vec<MovementRow>,
    pub summary: Summary,
}

impl Statement {
    pub fn build(account: &Account, sorted: bool) -> Self {
        Self {
            username: account.username.clone(),
            welcome: format!("Welcome back, {}", account.first_name()),
            sorted,
            rows: movement_rows(&account.movements, sorted),
            summary: Summary::of(account),
        }
    }
}

/// Rows in stored order, or ascending by amount when `sorted`. Sorting works
/// on a copy and is stable, so equal amounts keep their stored order.
pub fn movement_rows(movements: &[Money], sorted: bool) -> Vec<MovementRow> {
    let mut rows: Vec<MovementRow> = movements
        .iter()
        .enumerate()
        .map(|(i, &amount)| MovementRow {
            position: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .collect();
    if sorted {
        rows.sort_by_key(|row| row.amount);
    }
    rows
}
