use tracing::warn;

use crate::{
    common::{error::Rejection, event::BankAction},
    domain::{session::Session, statement::Statement, store::AccountStore},
    worker::handlers::{close, loan, login, logout, sort, transfer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Runs user actions one at a time against an account store. Holds the
/// session: `None` while logged out.
#[derive(Debug, Default)]
pub struct Processor {
    session: Option<Session>,
}

impl Processor {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn process(&mut self, store: &mut AccountStore, action: BankAction) -> Outcome {
        let name = action.name();
        let result = match action {
            BankAction::Login { username, pin } => {
                login::handle(store, &mut self.session, &username, &pin)
            }
            BankAction::Transfer { to, amount } => {
                transfer::handle(store, self.session.as_ref(), &to, &amount)
            }
            BankAction::Loan { amount } => loan::handle(store, self.session.as_ref(), &amount),
            BankAction::Close { username, pin } => {
                close::handle(store, &mut self.session, &username, &pin)
            }
            BankAction::Sort => sort::handle(self.session.as_mut()),
            BankAction::Logout => logout::handle(&mut self.session),
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(reason) => {
                warn!(action = name, %reason, "action rejected");
                Outcome::Rejected(reason)
            }
        }
    }

    /// The current view of the logged-in account, if any.
    pub fn statement(&self, store: &AccountStore) -> Option<Statement> {
        let session = self.session.as_ref()?;
        let account = store.get(session.username())?;
        Some(Statement::build(account, session.is_sorted()))
    }
}
