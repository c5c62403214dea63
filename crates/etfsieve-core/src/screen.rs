//! One-pass screening pipeline: filter, extract, rank.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    extract_metrics, filter_by_drawdown, rank_by_risk_adjusted_score, PriceSource, ScoredTicker,
    ScoringMode, Ticker, UserConstraints, ValidationError,
};

/// Number of recommendations returned when the caller does not ask
/// for a specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// Everything one screening pass needs, supplied explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRequest {
    pub universe: Vec<Ticker>,
    pub constraints: UserConstraints,
    pub mode: ScoringMode,
    pub as_of: Date,
    pub top_n: usize,
}

/// Run the full pipeline over a ticker universe.
///
/// Pure function of its arguments: identical inputs produce identical
/// output. An empty result is a valid terminal state, not an error.
pub fn screen(
    source: &dyn PriceSource,
    request: &ScreenRequest,
) -> Result<Vec<ScoredTicker>, ValidationError> {
    let admissible = filter_by_drawdown(
        source,
        &request.universe,
        request.constraints.max_drawdown_pct,
        request.constraints.min_age_years,
        request.as_of,
    )?;
    let admissible: Vec<Ticker> = admissible.into_iter().collect();

    let metrics = extract_metrics(
        source,
        &admissible,
        request.constraints.time_horizon_years,
        request.as_of,
    )?;

    Ok(rank_by_risk_adjusted_score(
        &metrics,
        request.mode,
        request.top_n,
    ))
}
