use tracing::info;

use crate::{
    common::error::Rejection,
    domain::{session::Session, store::AccountStore},
    worker::handlers,
};

/// Grants a loan when at least one past movement is worth a tenth of it.
pub fn handle(
    store: &mut AccountStore,
    session: Option<&Session>,
    amount: &str,
) -> Result<(), Rejection> {
    let username = handlers::active_session(session)?.username();
    let amount = handlers::positive_amount(amount)?;

    let account = store
        .get_mut(username)
        .ok_or_else(|| Rejection::UnknownAccount(username.to_string()))?;

    if !account.movements.iter().any(|m| m.covers_tenth_of(amount)) {
        return Err(Rejection::LoanNotQualified);
    }

    account.push_movement(amount)?;
    info!(username, %amount, "loan granted");
    Ok(())
}
