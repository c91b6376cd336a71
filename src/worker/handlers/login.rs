use tracing::info;

use crate::{
    common::error::Rejection,
    domain::{session::Session, store::AccountStore},
    worker::handlers,
};

/// Replaces the current session with one for `username` if the pin matches.
/// On any failure the current session, logged in or not, stays as it was.
pub fn handle(
    store: &AccountStore,
    session: &mut Option<Session>,
    username: &str,
    pin: &str,
) -> Result<(), Rejection> {
    let account = store
        .get(username)
        .ok_or_else(|| Rejection::UnknownAccount(username.to_string()))?;

    if account.pin != handlers::pin(pin)? {
        return Err(Rejection::WrongPin);
    }

    info!(username = %account.username, "logged in");
    *session = Some(Session::new(account.username.clone()));
    Ok(())
}
