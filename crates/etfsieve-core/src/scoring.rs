//! Risk-adjusted scoring and top-N ranking.

use serde::{Deserialize, Serialize};

use crate::{Ticker, TickerMetric};

/// Outcome of a risk-adjusted score computation.
///
/// Degenerate ratios (zero volatility, zero downside deviation) are
/// `Undefined`, never an infinite sentinel, so ranking logic cannot
/// accidentally compare an excluded ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Defined(f64),
    Undefined,
}

impl Score {
    /// Defined score constructor guarding against non-finite ratios.
    pub fn from_ratio(value: f64) -> Self {
        if value.is_finite() {
            Self::Defined(value)
        } else {
            Self::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

/// Which risk measure divides the excess return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Excess return over total volatility.
    Sharpe { risk_free_rate_pct: f64 },
    /// Excess return over downside deviation only.
    Sortino { target_return_pct: f64 },
}

/// A ticker's metrics plus its risk-adjusted score.
///
/// `downside_deviation_pct` is only populated in Sortino mode; Sharpe
/// mode has no downside concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTicker {
    pub ticker: Ticker,
    pub annualized_return_pct: f64,
    pub annualized_std_dev_pct: f64,
    pub downside_deviation_pct: Option<f64>,
    pub score: Score,
}

fn score_metric(metric: &TickerMetric, mode: ScoringMode) -> ScoredTicker {
    let (downside_deviation_pct, score) = match mode {
        ScoringMode::Sharpe { risk_free_rate_pct } => {
            let score = if metric.annualized_std_dev_pct == 0.0 {
                Score::Undefined
            } else {
                Score::from_ratio(
                    (metric.annualized_return_pct - risk_free_rate_pct)
                        / metric.annualized_std_dev_pct,
                )
            };
            (None, score)
        }
        ScoringMode::Sortino { target_return_pct } => {
            let downside = (target_return_pct - metric.annualized_return_pct).max(0.0);
            let score = if downside > 0.0 {
                Score::from_ratio((metric.annualized_return_pct - target_return_pct) / downside)
            } else {
                // Never fell below target: excluded rather than "infinite".
                Score::Undefined
            };
            (Some(downside), score)
        }
    };

    ScoredTicker {
        ticker: metric.ticker.clone(),
        annualized_return_pct: metric.annualized_return_pct,
        annualized_std_dev_pct: metric.annualized_std_dev_pct,
        downside_deviation_pct,
        score,
    }
}

/// Rank metrics by risk-adjusted score, best first, keeping `top_n`.
///
/// Undefined scores never appear in the output. Ties break on ticker
/// ascending so identical inputs always produce identical rankings.
pub fn rank_by_risk_adjusted_score(
    metrics: &[TickerMetric],
    mode: ScoringMode,
    top_n: usize,
) -> Vec<ScoredTicker> {
    let mut ranked: Vec<ScoredTicker> = metrics
        .iter()
        .map(|metric| score_metric(metric, mode))
        .filter(|scored| scored.score.is_defined())
        .collect();

    ranked.sort_by(|left, right| {
        let left_score = left.score.value().unwrap_or(f64::NEG_INFINITY);
        let right_score = right.score.value().unwrap_or(f64::NEG_INFINITY);
        right_score
            .total_cmp(&left_score)
            .then_with(|| left.ticker.cmp(&right.ticker))
    });
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ticker;

    fn metric(ticker: &str, annual_return: f64, annual_std: f64) -> TickerMetric {
        TickerMetric {
            ticker: Ticker::parse(ticker).expect("must parse"),
            annualized_return_pct: annual_return,
            annualized_std_dev_pct: annual_std,
        }
    }

    #[test]
    fn sharpe_divides_excess_return_by_volatility() {
        let metrics = vec![metric("XIC", 10.0, 5.0)];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sharpe {
                risk_free_rate_pct: 2.0,
            },
            5,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, Score::Defined(1.6));
        assert_eq!(ranked[0].downside_deviation_pct, None);
    }

    #[test]
    fn sharpe_zero_volatility_is_undefined_not_infinite() {
        let metrics = vec![metric("FLAT", 10.0, 0.0), metric("XIC", 8.0, 4.0)];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sharpe {
                risk_free_rate_pct: 2.0,
            },
            5,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].ticker.as_str(), "XIC");
    }

    #[test]
    fn sortino_excludes_ticker_that_never_falls_below_target() {
        let metrics = vec![metric("HIGH", 12.0, 8.0), metric("LOW", 3.0, 6.0)];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sortino {
                target_return_pct: 5.0,
            },
            5,
        );
        // HIGH exceeds the target, so its downside deviation is zero
        // and it is excluded rather than ranked first.
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].ticker.as_str(), "LOW");
        assert_eq!(ranked[0].downside_deviation_pct, Some(2.0));
    }

    #[test]
    fn sortino_return_exactly_at_target_is_undefined() {
        let metrics = vec![metric("ATPAR", 5.0, 4.0)];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sortino {
                target_return_pct: 5.0,
            },
            5,
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn ranking_is_descending_and_respects_top_n() {
        let metrics = vec![
            metric("AAA", 6.0, 4.0),
            metric("BBB", 10.0, 4.0),
            metric("CCC", 8.0, 4.0),
        ];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sharpe {
                risk_free_rate_pct: 2.0,
            },
            2,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].ticker.as_str(), "BBB");
        assert_eq!(ranked[1].ticker.as_str(), "CCC");
    }

    #[test]
    fn equal_scores_break_ties_on_ticker_ascending() {
        let metrics = vec![metric("ZSP", 10.0, 4.0), metric("AVUV", 10.0, 4.0)];
        let ranked = rank_by_risk_adjusted_score(
            &metrics,
            ScoringMode::Sharpe {
                risk_free_rate_pct: 2.0,
            },
            5,
        );
        assert_eq!(ranked[0].ticker.as_str(), "AVUV");
        assert_eq!(ranked[1].ticker.as_str(), "ZSP");
    }

    #[test]
    fn undefined_score_serializes_as_null() {
        let json = serde_json::to_string(&Score::Undefined).expect("must serialize");
        assert_eq!(json, "null");
        let json = serde_json::to_string(&Score::Defined(1.5)).expect("must serialize");
        assert_eq!(json, "1.5");
    }
}
