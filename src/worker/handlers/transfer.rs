use tracing::info;

use crate::{
    common::error::Rejection,
    domain::{session::Session, store::AccountStore},
    worker::handlers,
};

pub fn handle(
    store: &mut AccountStore,
    session: Option<&Session>,
    to: &str,
    amount: &str,
) -> Result<(), Rejection> {
    let from = handlers::active_session(session)?.username();
    let amount = handlers::positive_amount(amount)?;

    let sender = store
        .get(from)
        .ok_or_else(|| Rejection::UnknownAccount(from.to_string()))?;

    // balance is recomputed from the ledger, never cached
    if amount > sender.balance() {
        return Err(Rejection::InsufficientFunds);
    }

    store.post_transfer(from, to, amount)?;
    info!(from, to, %amount, "transfer posted");
    Ok(())
}
