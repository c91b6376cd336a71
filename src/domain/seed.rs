use crate::{
    common::{error::AppError, money::Money, rate::Rate},
    domain::{
        account::{Account, Pin},
        store::AccountStore,
    },
};

fn account(owner: &str, movements: &[i64], rate_hundredths: i64, pin: u32) -> Account {
    Account::new(
        owner,
        Pin::new(pin),
        Rate::from_hundredths(rate_hundredths),
        movements.iter().copied().map(Money::from_major).collect(),
    )
}

/// The four demo accounts.
pub fn default_accounts() -> Vec<Account> {
    vec![
        account(
            "Jonas Schmedtmann",
            &[200, 450, -400, 3000, -650, -130, 70, 1300],
            120,
            1111,
        ),
        account(
            "Jessica Davis",
            &[5000, 3400, -150, -790, -3210, -1000, 8500, -30],
            150,
            2222,
        ),
        account(
            "Steven Thomas Williams",
            &[200, -200, 340, -300, -20, 50, 400, -460],
            70,
            3333,
        ),
        account("Sarah Smith", &[430, 1000, 700, 50, 90], 100, 4444),
    ]
}

pub fn default_store() -> Result<AccountStore, AppError> {
    AccountStore::new(default_accounts())
}
