//! Maximum-drawdown computation and universe eligibility filtering.

use std::collections::BTreeSet;

use time::Date;

use crate::domain::years_before;
use crate::{PricePoint, PriceSource, Ticker, ValidationError};

/// Largest peak-to-trough decline over `points`, as a fraction in `[0, 1]`.
///
/// Single scan maintaining the running maximum price; at each point the
/// drawdown is `(running_max - price) / running_max`.
pub fn max_drawdown(points: &[PricePoint]) -> f64 {
    let mut running_max = 0.0_f64;
    let mut worst = 0.0_f64;

    for point in points {
        if point.adj_close > running_max {
            running_max = point.adj_close;
        }
        if running_max > 0.0 {
            let drawdown = (running_max - point.adj_close) / running_max;
            if drawdown > worst {
                worst = drawdown;
            }
        }
    }

    worst
}

/// Retain tickers whose full history up to `as_of` stays within the
/// drawdown tolerance and whose listing is at least `min_age_years` old.
///
/// Tickers with no series or fewer than two observations are dropped
/// silently. The result is a set; output order carries no meaning.
pub fn filter_by_drawdown(
    source: &dyn PriceSource,
    tickers: &[Ticker],
    max_drawdown_pct: f64,
    min_age_years: u32,
    as_of: Date,
) -> Result<BTreeSet<Ticker>, ValidationError> {
    if !max_drawdown_pct.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            field: "max_drawdown_pct",
        });
    }
    if max_drawdown_pct < 0.0 {
        return Err(ValidationError::NegativeDrawdownLimit {
            value: max_drawdown_pct,
        });
    }

    let limit = max_drawdown_pct / 100.0;
    let age_cutoff = years_before(as_of, min_age_years)?;
    let mut retained = BTreeSet::new();

    for ticker in tickers {
        let Some(series) = source.price_series(ticker) else {
            continue;
        };
        let history = series.up_to(as_of);
        if history.len() < 2 {
            continue;
        }
        // history is non-empty here
        let listed = history[0].date;
        if listed > age_cutoff {
            continue;
        }
        if max_drawdown(history) <= limit {
            retained.insert(ticker.clone());
        }
    }

    Ok(retained)
}
