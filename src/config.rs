use std::path::PathBuf;

use clap::Parser;

/// Replays a script of banking actions against the demo accounts.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bankist", version, about)]
pub struct Config {
    /// CSV of actions with headers `action,user,pin,to,amount`
    pub actions: PathBuf,

    /// JSON file of accounts to use instead of the built-in demo accounts
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Print the account statement after every applied action
    #[arg(long)]
    pub statements: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn new(actions: impl Into<PathBuf>) -> Self {
        Self {
            actions: actions.into(),
            seed: None,
            statements: false,
            verbose: false,
        }
    }

    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from([
            "bankist",
            "actions.csv",
            "--seed",
            "accounts.json",
            "--statements",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.actions, PathBuf::from("actions.csv"));
        assert_eq!(config.seed, Some(PathBuf::from("accounts.json")));
        assert!(config.statements);
        assert_eq!(config.default_log_level(), "debug");
    }

    #[test]
    fn actions_path_is_required() {
        assert!(Config::try_parse_from(["bankist"]).is_err());
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["bankist", "a.csv"]).unwrap();
        assert_eq!(config, Config::new("a.csv"));
        assert_eq!(config.default_log_level(), "warn");
    }
}
