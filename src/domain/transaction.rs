use std::fmt;

use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Anything that is not strictly positive is shown as a withdrawal.
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
