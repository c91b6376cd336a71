#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("seed file error: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("invalid seed account {owner:?}: {reason}")]
    InvalidSeed { owner: String, reason: String },
    #[error("duplicate username {0:?} in account store")]
    DuplicateUsername(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Why a user action was refused. A rejection never changes any state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no active session")]
    NoActiveSession,
    #[error("unknown account {0:?}")]
    UnknownAccount(String),
    #[error("wrong pin")]
    WrongPin,
    #[error("pin is not a number: {0:?}")]
    InvalidPin(String),
    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("cannot transfer to the same account")]
    SelfTransfer,
    #[error("no movement covers a tenth of the requested loan")]
    LoanNotQualified,
    #[error("credentials do not match the logged in account")]
    CredentialsMismatch,
    #[error("amount is out of range")]
    AmountTooLarge,
}
