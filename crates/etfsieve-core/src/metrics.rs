//! Per-ticker annualized return and volatility over a user horizon.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::years_before;
use crate::{PriceSource, Ticker, ValidationError};

/// Assumed trading days per year when annualizing daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Risk/return metrics for one ticker over one horizon.
///
/// Both fields are percentages and guaranteed finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMetric {
    pub ticker: Ticker,
    pub annualized_return_pct: f64,
    pub annualized_std_dev_pct: f64,
}

/// Compute metrics for every ticker with sufficient in-window history.
///
/// The window is `[as_of - time_horizon_years, as_of]`, both ends
/// inclusive. Tickers with missing data or degenerate computations
/// (non-finite intermediates) are skipped, never surfaced as errors.
pub fn extract_metrics(
    source: &dyn PriceSource,
    tickers: &[Ticker],
    time_horizon_years: u32,
    as_of: Date,
) -> Result<Vec<TickerMetric>, ValidationError> {
    if time_horizon_years == 0 {
        return Err(ValidationError::NonPositiveHorizon);
    }

    let start = years_before(as_of, time_horizon_years)?;
    let mut metrics = Vec::new();

    for ticker in tickers {
        let Some(series) = source.price_series(ticker) else {
            continue;
        };
        let window = series.window(start, as_of);
        if window.len() < 2 {
            continue;
        }

        let first = window[0].adj_close;
        let last = window[window.len() - 1].adj_close;
        let total_return = last / first - 1.0;
        let annualized_return_pct =
            ((1.0 + total_return).powf(1.0 / f64::from(time_horizon_years)) - 1.0) * 100.0;

        let daily_returns: Vec<f64> = window
            .windows(2)
            .map(|pair| pair[1].adj_close / pair[0].adj_close - 1.0)
            .collect();
        let Some(daily_std) = sample_std_dev(&daily_returns) else {
            continue;
        };
        let annualized_std_dev_pct = daily_std * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;

        if !annualized_return_pct.is_finite() || !annualized_std_dev_pct.is_finite() {
            continue;
        }

        metrics.push(TickerMetric {
            ticker: ticker.clone(),
            annualized_return_pct,
            annualized_std_dev_pct,
        });
    }

    Ok(metrics)
}

/// Sample standard deviation (n-1 divisor); `None` below two values.
fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    Some(variance.sqrt())
}
