use crate::common::event::BankAction;
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Columns that
/// an action does not use may be blank or missing.
struct CsvRow {
    action: String,
    user: Option<String>,
    pin: Option<String>,
    to: Option<String>,
    amount: Option<String>,
}

/// Reads user actions from a CSV reader.
///
/// Supported headers: `action,user,pin,to,amount`.
/// The `action` field is matched case-insensitively. Field values are passed
/// on as typed text; a blank numeric field becomes an empty string, which the
/// handlers reject. Errors carry the 1-based data row number.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_actions;
/// use bankist::common::event::BankAction;
/// use csv::ReaderBuilder;
///
/// let data = "action,user,pin,to,amount\n\
/// login,js,1111,,\n\
/// transfer,,,jd,100\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let actions: Vec<_> = read_actions(&mut rdr).collect();
///
/// assert!(matches!(&actions[0], Ok(BankAction::Login { username, .. }) if username == "js"));
/// assert!(matches!(&actions[1], Ok(BankAction::Transfer { to, .. }) if to == "jd"));
/// ```
pub fn read_actions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<BankAction, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, res)| {
            let row = res.map_err(|e| e.to_string())?;
            let line = i + 1;
            let kind = row.action.trim().to_ascii_lowercase();
            let text = |field: Option<String>| field.unwrap_or_default();

            match kind.as_str() {
                "login" => {
                    let username = row
                        .user
                        .ok_or_else(|| format!("login missing user on row {line}"))?;
                    Ok(BankAction::Login {
                        username,
                        pin: text(row.pin),
                    })
                }
                "transfer" => {
                    let to = row
                        .to
                        .ok_or_else(|| format!("transfer missing recipient on row {line}"))?;
                    Ok(BankAction::Transfer {
                        to,
                        amount: text(row.amount),
                    })
                }
                "loan" => Ok(BankAction::Loan {
                    amount: text(row.amount),
                }),
                "close" => Ok(BankAction::Close {
                    username: text(row.user),
                    pin: text(row.pin),
                }),
                "sort" => Ok(BankAction::Sort),
                "logout" => Ok(BankAction::Logout),
                other => Err(format!("unknown action: {other} on row {line}")),
            }
        })
}
