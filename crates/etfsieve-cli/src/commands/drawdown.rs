use serde::Serialize;
use serde_json::Value;
use time::Date;

use etfsieve_core::{filter_by_drawdown, max_drawdown, PriceSource, Ticker};

use crate::cli::DrawdownArgs;
use crate::error::CliError;
use crate::store::CsvPriceStore;

use super::resolve_universe;

#[derive(Debug, Serialize)]
struct DrawdownRow {
    ticker: Ticker,
    max_drawdown_pct: Option<f64>,
    listed: Option<Date>,
    retained: bool,
}

#[derive(Debug, Serialize)]
struct DrawdownResponseData {
    as_of: Date,
    max_drawdown_pct: f64,
    min_age_years: u32,
    tickers: Vec<DrawdownRow>,
}

pub fn run(store: &CsvPriceStore, args: &DrawdownArgs, as_of: Date) -> Result<Value, CliError> {
    let universe = resolve_universe(store, &args.tickers)?;
    let retained = filter_by_drawdown(
        store,
        &universe,
        args.max_drawdown,
        args.min_age_years,
        as_of,
    )?;

    let tickers = universe
        .iter()
        .map(|ticker| {
            let history = store
                .price_series(ticker)
                .map(|series| series.up_to(as_of))
                .unwrap_or_default();
            let max_drawdown_pct = (history.len() >= 2).then(|| max_drawdown(history) * 100.0);
            DrawdownRow {
                ticker: ticker.clone(),
                max_drawdown_pct,
                listed: history.first().map(|point| point.date),
                retained: retained.contains(ticker),
            }
        })
        .collect();

    Ok(serde_json::to_value(DrawdownResponseData {
        as_of,
        max_drawdown_pct: args.max_drawdown,
        min_age_years: args.min_age_years,
        tickers,
    })?)
}
