mod drawdown;
mod metrics;
mod screen;

use serde_json::Value;
use time::{Date, OffsetDateTime};

use etfsieve_core::{parse_date, Ticker};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::store::CsvPriceStore;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    let store = CsvPriceStore::load(&cli.data_dir)?;
    let as_of = resolve_as_of(cli.as_of.as_deref())?;

    match &cli.command {
        Command::Screen(args) => screen::run(&store, args, as_of),
        Command::Metrics(args) => metrics::run(&store, args, as_of),
        Command::Drawdown(args) => drawdown::run(&store, args, as_of),
    }
}

fn resolve_as_of(raw: Option<&str>) -> Result<Date, CliError> {
    match raw {
        Some(value) => Ok(parse_date(value)?),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

/// Explicit tickers if given, otherwise the whole store.
fn resolve_universe(store: &CsvPriceStore, raw: &[String]) -> Result<Vec<Ticker>, CliError> {
    if raw.is_empty() {
        return Ok(store.tickers().to_vec());
    }
    raw.iter()
        .map(|value| Ticker::parse(value).map_err(CliError::from))
        .collect()
}
