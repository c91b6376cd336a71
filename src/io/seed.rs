use std::{io::Read, str::FromStr};

use serde_json::Number;

use crate::{
    common::{error::AppError, money::Money, rate::Rate},
    domain::account::{Account, Pin},
};

#[derive(serde::Deserialize)]
/// One account in a JSON seed file. Numbers are kept as their JSON text so
/// `1.2` is read as exactly 1.2.
struct SeedAccount {
    owner: String,
    pin: u32,
    interest_rate: Number,
    movements: Vec<Number>,
}

/// Reads accounts from a JSON array of
/// `{ "owner", "pin", "interest_rate", "movements" }` objects.
///
/// # Examples
///
/// ```
/// use bankist::io::seed::read_accounts;
///
/// let json = r#"[{"owner": "Sarah Smith", "pin": 4444,
///                 "interest_rate": 1, "movements": [430, -30.5]}]"#;
/// let accounts = read_accounts(json.as_bytes()).unwrap();
///
/// assert_eq!(accounts[0].username, "ss");
/// assert_eq!(accounts[0].balance().to_string_2dp(), "399.50");
/// ```
pub fn read_accounts<R: Read>(reader: R) -> Result<Vec<Account>, AppError> {
    let rows: Vec<SeedAccount> = serde_json::from_reader(reader)?;
    rows.into_iter().map(into_account).collect()
}

fn into_account(row: SeedAccount) -> Result<Account, AppError> {
    let invalid = |reason: String| AppError::InvalidSeed {
        owner: row.owner.clone(),
        reason,
    };

    let interest_rate = Rate::from_str(&row.interest_rate.to_string())
        .map_err(|e| invalid(format!("interest rate {}: {e}", row.interest_rate)))?;
    let movements = row
        .movements
        .iter()
        .map(|n| Money::from_str(&n.to_string()).map_err(|e| invalid(format!("movement {n}: {e}"))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Account::new(
        row.owner.clone(),
        Pin::new(row.pin),
        interest_rate,
        movements,
    ))
}
