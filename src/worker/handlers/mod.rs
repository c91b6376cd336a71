pub mod close;
pub mod loan;
pub mod login;
pub mod logout;
pub mod sort;
pub mod transfer;

use std::str::FromStr;

use crate::{
    common::{error::Rejection, money::Money},
    domain::{account::Pin, session::Session},
};

// Checks shared by the handlers.

pub(crate) fn active_session(session: Option<&Session>) -> Result<&Session, Rejection> {
    session.ok_or(Rejection::NoActiveSession)
}

/// Parses a user-typed amount that must be strictly positive.
pub(crate) fn positive_amount(raw: &str) -> Result<Money, Rejection> {
    let amount = Money::from_str(raw).map_err(|_| Rejection::InvalidAmount(raw.to_string()))?;
    if !amount.is_positive() {
        return Err(Rejection::NonPositiveAmount);
    }
    Ok(amount)
}

pub(crate) fn pin(raw: &str) -> Result<Pin, Rejection> {
    Pin::from_str(raw).map_err(|e| Rejection::InvalidPin(e.0))
}
