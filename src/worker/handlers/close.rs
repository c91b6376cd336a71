use tracing::info;

use crate::{
    common::error::Rejection,
    domain::{session::Session, store::AccountStore},
    worker::handlers,
};

/// Removes the logged-in account when the typed credentials match it, then
/// ends the session.
pub fn handle(
    store: &mut AccountStore,
    session: &mut Option<Session>,
    username: &str,
    pin: &str,
) -> Result<(), Rejection> {
    let current = handlers::active_session(session.as_ref())?.username();
    let account = store
        .get(current)
        .ok_or_else(|| Rejection::UnknownAccount(current.to_string()))?;

    let pin = handlers::pin(pin)?;
    if username != account.username || pin != account.pin {
        return Err(Rejection::CredentialsMismatch);
    }

    let removed = store.remove(username);
    *session = None;
    if let Some(account) = removed {
        info!(username = %account.username, remaining = store.len(), "account closed");
    }
    Ok(())
}
