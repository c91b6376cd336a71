use std::fs;
use std::io::Cursor;

use bankist::{
    app,
    common::{error::AppError, money::Money},
    config::Config,
    domain::seed::default_store,
    worker::processor::{Outcome, Processor},
};

fn run_case(config: &Config, input_csv: &str) -> String {
    let mut out = Vec::<u8>::new();
    app::run_with(config, Cursor::new(input_csv.as_bytes()), &mut out)
        .expect("failed to replay actions");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_fixture(config: &Config, input: &str, expected: &str) {
    let input = fs::read_to_string(input).unwrap();
    let expected = fs::read_to_string(expected).unwrap();

    let actual = run_case(config, &input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case1_login_and_transfer() {
    assert_fixture(
        &Config::new("unused.csv"),
        "tests/fixtures/case1_input.csv",
        "tests/fixtures/case1_expected.csv",
    );
}

#[test]
fn case2_loan_close_and_relogin() {
    assert_fixture(
        &Config::new("unused.csv"),
        "tests/fixtures/case2_input.csv",
        "tests/fixtures/case2_expected.csv",
    );
}

#[test]
fn case3_rejected_actions_change_nothing() {
    assert_fixture(
        &Config::new("unused.csv"),
        "tests/fixtures/case3_input.csv",
        "tests/fixtures/case3_expected.csv",
    );
}

#[test]
fn case4_statements_follow_each_applied_action() {
    let mut config = Config::new("unused.csv");
    config.statements = true;
    assert_fixture(
        &config,
        "tests/fixtures/case4_input.csv",
        "tests/fixtures/case4_expected.txt",
    );
}

#[test]
fn seed_file_replaces_demo_accounts() {
    let mut config = Config::new("unused.csv");
    config.seed = Some("tests/fixtures/seed_accounts.json".into());
    assert_fixture(
        &config,
        "tests/fixtures/seed_case_input.csv",
        "tests/fixtures/seed_case_expected.csv",
    );
}

#[test]
fn duplicate_usernames_in_seed_are_fatal() {
    let mut config = Config::new("unused.csv");
    config.seed = Some("tests/fixtures/duplicate_seed.json".into());

    let input = "action,user,pin,to,amount\n";
    let result = app::run_with(&config, Cursor::new(input.as_bytes()), Vec::new());

    assert!(matches!(result, Err(AppError::DuplicateUsername(u)) if u == "js"));
}

#[test]
fn overflowing_seed_movements_are_fatal() {
    let mut config = Config::new("unused.csv");
    config.seed = Some("tests/fixtures/overflow_seed.json".into());

    let input = "action,user,pin,to,amount\n";
    let result = app::run_with(&config, Cursor::new(input.as_bytes()), Vec::new());

    assert!(matches!(result, Err(AppError::InvalidSeed { owner, .. }) if owner == "Max Out"));
}

#[test]
fn unknown_action_aborts_replay() {
    let input = "action,user,pin,to,amount\nlogin,js,1111,,\nwithdraw,,,,5\n";
    let result = app::run_with(&Config::new("unused.csv"), Cursor::new(input.as_bytes()), Vec::new());

    assert!(matches!(result, Err(AppError::Parse(msg)) if msg == "unknown action: withdraw on row 2"));
}

#[test]
fn transfers_conserve_total_money() {
    let mut store = default_store().unwrap();
    let total = |store: &bankist::domain::store::AccountStore| {
        let balances: Vec<Money> = store.accounts().iter().map(|a| a.balance()).collect();
        Money::saturating_sum(&balances)
    };
    let before = total(&store);

    let mut processor = Processor::new();
    let script = [
        ("jd", "2222", "js", "700"),
        ("js", "1111", "stw", "4540"),
        ("stw", "3333", "ss", "4550"),
        ("ss", "4444", "jd", "0.01"),
    ];
    for (user, pin, to, amount) in script {
        let login = bankist::common::event::BankAction::Login {
            username: user.into(),
            pin: pin.into(),
        };
        assert_eq!(processor.process(&mut store, login), Outcome::Applied);
        let transfer = bankist::common::event::BankAction::Transfer {
            to: to.into(),
            amount: amount.into(),
        };
        assert_eq!(processor.process(&mut store, transfer), Outcome::Applied, "{user} -> {to}");
    }

    assert_eq!(total(&store), before);
}
