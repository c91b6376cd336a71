use tracing::info;

use crate::{common::error::Rejection, domain::session::Session};

pub fn handle(session: &mut Option<Session>) -> Result<(), Rejection> {
    let ended = session.take().ok_or(Rejection::NoActiveSession)?;
    info!(username = ended.username(), "logged out");
    Ok(())
}
