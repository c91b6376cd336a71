use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdout},
};

use tracing::{debug, info};

use crate::{
    common::error::AppError,
    config::Config,
    domain::{seed::default_store, store::AccountStore},
    io::{reader, seed, writer},
    worker::processor::Processor,
};

pub fn run(config: &Config) -> Result<(), AppError> {
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    let actions = File::open(&config.actions)?;
    run_with(config, actions, out)
}

/// Replays every action from `actions` and writes the final account state.
/// With `config.statements` the rendered view is written after each applied
/// action as well.
pub fn run_with<R: Read, W: Write>(config: &Config, actions: R, mut out: W) -> Result<(), AppError> {
    let mut store = load_store(config)?;
    info!(accounts = store.len(), "account store ready");

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(actions);

    let mut processor = Processor::new();
    for action in reader::read_actions(&mut rdr) {
        let action = action.map_err(AppError::Parse)?;
        let outcome = processor.process(&mut store, action);

        if config.statements && outcome.is_applied() {
            match processor.statement(&store) {
                Some(statement) => {
                    debug!(username = %statement.username, sorted = statement.sorted, "render");
                    writer::write_statement(&mut out, &statement)?;
                }
                None => writer::write_logged_out(&mut out)?,
            }
        }
    }

    writer::write_accounts(&mut out, store.accounts())?;
    Ok(())
}

fn load_store(config: &Config) -> Result<AccountStore, AppError> {
    match &config.seed {
        Some(path) => {
            let file = BufReader::new(File::open(path)?);
            AccountStore::new(seed::read_accounts(file)?)
        }
        None => default_store(),
    }
}
