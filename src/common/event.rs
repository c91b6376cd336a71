/// A user action sent from the input surface to the processor.
///
/// Numeric fields stay as the raw text the user typed; handlers parse them and
/// reject the action if they are not numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAction {
    Login { username: String, pin: String },
    Transfer { to: String, amount: String },
    Loan { amount: String },
    Close { username: String, pin: String },
    Sort,
    Logout,
}

impl BankAction {
    pub fn name(&self) -> &'static str {
        match self {
            BankAction::Login { .. } => "login",
            BankAction::Transfer { .. } => "transfer",
            BankAction::Loan { .. } => "loan",
            BankAction::Close { .. } => "close",
            BankAction::Sort => "sort",
            BankAction::Logout => "logout",
        }
    }
}
