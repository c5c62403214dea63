use serde::Serialize;
use serde_json::Value;
use time::Date;

use etfsieve_core::{extract_metrics, TickerMetric};

use crate::cli::MetricsArgs;
use crate::error::CliError;
use crate::store::CsvPriceStore;

use super::resolve_universe;

#[derive(Debug, Serialize)]
struct MetricsResponseData {
    as_of: Date,
    horizon_years: u32,
    metrics: Vec<TickerMetric>,
}

pub fn run(store: &CsvPriceStore, args: &MetricsArgs, as_of: Date) -> Result<Value, CliError> {
    let universe = resolve_universe(store, &args.tickers)?;
    let metrics = extract_metrics(store, &universe, args.horizon_years, as_of)?;

    Ok(serde_json::to_value(MetricsResponseData {
        as_of,
        horizon_years: args.horizon_years,
        metrics,
    })?)
}
