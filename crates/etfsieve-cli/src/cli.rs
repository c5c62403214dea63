//! CLI argument definitions for etfsieve.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `screen` | Full pipeline: drawdown filter, metrics, ranked top-N |
//! | `metrics` | Annualized return/volatility per ticker |
//! | `drawdown` | Per-ticker maximum drawdown and eligibility |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--data-dir` | `data` | Directory of price CSVs |
//! | `--as-of` | today | Valuation date (YYYY-MM-DD) |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// ETF screening over a local CSV price store.
///
/// Each `<TICKER>.csv` in the data directory holds `date,adj_close`
/// rows; an optional `rates.csv` holds `date,rate_pct` risk-free rate
/// observations.
#[derive(Debug, Parser)]
#[command(name = "etfsieve", about = "ETF risk/return screening CLI")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Directory containing the CSV price store.
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Valuation date (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreKind {
    /// Excess return over total volatility.
    Sharpe,
    /// Excess return over downside deviation.
    Sortino,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full screening pipeline and print the ranked top-N.
    Screen(ScreenArgs),
    /// Compute annualized return and volatility per ticker.
    Metrics(MetricsArgs),
    /// Report per-ticker maximum drawdown and eligibility.
    Drawdown(DrawdownArgs),
}

#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Tickers to screen; defaults to every ticker in the store.
    pub tickers: Vec<String>,

    /// Investment horizon in whole years.
    #[arg(long, default_value_t = 8)]
    pub horizon_years: u32,

    /// Desired annual return in percent (Sortino target).
    #[arg(long, default_value_t = 10.0)]
    pub target_return: f64,

    /// Largest tolerable historical drawdown in percent.
    #[arg(long, default_value_t = 35.0)]
    pub max_drawdown: f64,

    /// Minimum listing age in whole years.
    #[arg(long, default_value_t = 5)]
    pub min_age_years: u32,

    /// Risk measure used for ranking.
    #[arg(long, value_enum, default_value_t = ScoreKind::Sharpe)]
    pub mode: ScoreKind,

    /// Number of recommendations to return.
    #[arg(long, default_value_t = etfsieve_core::DEFAULT_TOP_N)]
    pub top: usize,

    /// Override the risk-free rate (annualized percent).
    #[arg(long)]
    pub risk_free: Option<f64>,
}

#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Tickers to measure; defaults to every ticker in the store.
    pub tickers: Vec<String>,

    /// Investment horizon in whole years.
    #[arg(long, default_value_t = 8)]
    pub horizon_years: u32,
}

#[derive(Debug, Args)]
pub struct DrawdownArgs {
    /// Tickers to inspect; defaults to every ticker in the store.
    pub tickers: Vec<String>,

    /// Largest tolerable historical drawdown in percent.
    #[arg(long, default_value_t = 35.0)]
    pub max_drawdown: f64,

    /// Minimum listing age in whole years.
    #[arg(long, default_value_t = 0)]
    pub min_age_years: u32,
}
