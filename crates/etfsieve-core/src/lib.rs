//! Core contracts for etfsieve.
//!
//! This crate contains:
//! - Canonical domain models and validation (tickers, price series, constraints)
//! - The `PriceSource` collaborator boundary for historical prices and rates
//! - Drawdown-based eligibility filtering
//! - Annualized return/volatility extraction
//! - Risk-adjusted (Sharpe/Sortino style) scoring and top-N ranking

pub mod domain;
pub mod drawdown;
pub mod error;
pub mod metrics;
pub mod price_source;
pub mod scoring;
pub mod screen;

pub use domain::{parse_date, PricePoint, PriceSeries, Ticker, UserConstraints};
pub use drawdown::{filter_by_drawdown, max_drawdown};
pub use error::{CoreError, ValidationError};
pub use metrics::{extract_metrics, TickerMetric, TRADING_DAYS_PER_YEAR};
pub use price_source::{MemoryPriceSource, PriceSource};
pub use scoring::{rank_by_risk_adjusted_score, Score, ScoredTicker, ScoringMode};
pub use screen::{screen, ScreenRequest, DEFAULT_TOP_N};
