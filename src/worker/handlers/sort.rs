use tracing::debug;

use crate::{common::error::Rejection, domain::session::Session};

pub fn handle(session: Option<&mut Session>) -> Result<(), Rejection> {
    let session = session.ok_or(Rejection::NoActiveSession)?;
    let sorted = session.toggle_sort();
    debug!(username = session.username(), sorted, "sort toggled");
    Ok(())
}
