use crate::common::{error::Rejection, money::Money, rate::Rate};
use crate::domain::ledger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub owner: String,
    /// Lowercase initials of `owner`, fixed when the account is built.
    pub username: String,
    pub pin: Pin,
    pub interest_rate: Rate,
    /// Chronological, append-only.
    pub movements: Vec<Money>,
}

impl Account {
    pub fn new(owner: impl Into<String>, pin: Pin, interest_rate: Rate, movements: Vec<Money>) -> Self {
        let owner = owner.into();
        Self {
            username: derive_username(&owner),
            owner,
            pin,
            interest_rate,
            movements,
        }
    }

    pub fn balance(&self) -> Money {
        ledger::balance(&self.movements)
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }

    /// Whether `amount` can be appended while the account's turnover stays
    /// representable.
    pub fn accepts(&self, amount: Money) -> bool {
        ledger::turnover(&self.movements)
            .and_then(|total| total.checked_add(amount.checked_abs()?))
            .is_some()
    }

    pub fn push_movement(&mut self, amount: Money) -> Result<(), Rejection> {
        if !self.accepts(amount) {
            return Err(Rejection::AmountTooLarge);
        }
        self.movements.push(amount);
        Ok(())
    }
}

/// Lowercase initials of each whitespace-separated word of `owner`.
///
/// # Examples
/// ```
/// use bankist::domain::account::derive_username;
///
/// assert_eq!(derive_username("Steven Thomas Williams"), "stw");
/// assert_eq!(derive_username("Sarah Smith"), "ss");
/// ```
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin(u32);

impl Pin {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("pin is not a number: {0:?}")]
pub struct PinParseError(pub String);

impl std::str::FromStr for Pin {
    type Err = PinParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Pin)
            .map_err(|_| PinParseError(s.to_string()))
    }
}
