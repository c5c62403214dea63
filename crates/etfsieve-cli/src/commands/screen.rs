use serde::Serialize;
use serde_json::Value;
use time::Date;

use etfsieve_core::{
    screen, PriceSource, ScoredTicker, ScoringMode, ScreenRequest, UserConstraints,
};

use crate::cli::{ScoreKind, ScreenArgs};
use crate::error::CliError;
use crate::store::CsvPriceStore;

use super::resolve_universe;

#[derive(Debug, Serialize)]
struct ScreenResponseData {
    as_of: Date,
    horizon_years: u32,
    mode: ScoringMode,
    universe_size: usize,
    results: Vec<ScoredTicker>,
}

pub fn run(store: &CsvPriceStore, args: &ScreenArgs, as_of: Date) -> Result<Value, CliError> {
    let universe = resolve_universe(store, &args.tickers)?;
    let constraints = UserConstraints::new(
        args.horizon_years,
        args.target_return,
        args.max_drawdown,
        args.min_age_years,
    )?;

    let mode = match args.mode {
        ScoreKind::Sharpe => {
            let risk_free_rate_pct = args
                .risk_free
                .or_else(|| store.risk_free_rate_pct(as_of))
                .ok_or_else(|| CliError::MissingRiskFreeRate {
                    as_of: as_of.to_string(),
                })?;
            ScoringMode::Sharpe { risk_free_rate_pct }
        }
        ScoreKind::Sortino => ScoringMode::Sortino {
            target_return_pct: args.target_return,
        },
    };

    let universe_size = universe.len();
    let request = ScreenRequest {
        universe,
        constraints,
        mode,
        as_of,
        top_n: args.top,
    };
    let results = screen(store, &request)?;

    Ok(serde_json::to_value(ScreenResponseData {
        as_of,
        horizon_years: args.horizon_years,
        mode,
        universe_size,
        results,
    })?)
}
