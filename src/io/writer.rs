use std::io::{self, Write};

use crate::{
    common::money::Money,
    domain::{account::Account, statement::Statement},
};

pub const CURRENCY_SYMBOL: &str = "$";

/// `$1300.00`, or `-$400.00` for negative amounts.
pub fn currency(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", amount.abs().to_string_2dp())
}

/// Writes a rendered statement as plain text.
///
/// One line per movement (`position kind value`), then the balance and the
/// summary totals. Deposit, withdrawal and interest totals are printed as
/// magnitudes; the balance keeps its sign.
///
/// # Examples
///
/// ```
/// use bankist::domain::{seed::default_store, statement::Statement};
/// use bankist::io::writer::write_statement;
///
/// let store = default_store().unwrap();
/// let statement = Statement::build(store.get("ss").unwrap(), false);
///
/// let mut out = Vec::new();
/// write_statement(&mut out, &statement).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("Welcome back, Sarah\n"));
/// assert!(s.contains("balance $2270.00"));
/// ```
pub fn write_statement<W: Write>(mut writer: W, statement: &Statement) -> io::Result<()> {
    writeln!(writer, "{}", statement.welcome)?;
    let order = if statement.sorted { "sorted" } else { "recorded" };
    writeln!(writer, "movements for {} ({order})", statement.username)?;
    for row in &statement.rows {
        writeln!(
            writer,
            "{:>3} {:<10} {:>12}",
            row.position,
            row.kind,
            currency(row.amount)
        )?;
    }

    let summary = &statement.summary;
    writeln!(writer, "balance {}", currency(summary.balance))?;
    writeln!(
        writer,
        "in {} out {} interest {}",
        currency(summary.deposits.abs()),
        currency(summary.withdrawals.abs()),
        currency(summary.interest.abs())
    )?;
    writer.flush()
}

/// What the presentation surface shows once nobody is logged in.
pub fn write_logged_out<W: Write>(mut writer: W) -> io::Result<()> {
    writeln!(writer, "Log in to get started")?;
    writer.flush()
}

#[derive(serde::Serialize)]
/// Internal CSV output row. Headers written (in this order):
/// `username,owner,movements,balance`.
struct OutputRow<'a> {
    username: &'a str,
    owner: &'a str,
    movements: usize,
    balance: String,
}

/// Writes the state of every account in store order as CSV.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        let row = OutputRow {
            username: &acc.username,
            owner: &acc.owner,
            movements: acc.movements.len(),
            balance: acc.balance().to_string_2dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
