use thiserror::Error;

/// Validation and contract errors exposed by `etfsieve-core`.
///
/// Data sparsity (missing series, too few observations) is never an
/// error; tickers with insufficient data are dropped silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker root length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker root must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker root contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },
    #[error("ticker venue suffix must be 1-3 ASCII letters: '{venue}'")]
    TickerInvalidVenue { venue: String },

    #[error("date must be ISO8601 (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },
    #[error("cannot step {years} years back: outside the supported calendar range")]
    DateOutOfRange { years: u32 },

    #[error("price series dates must be strictly increasing (index {index})")]
    PriceOutOfOrder { index: usize },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("time horizon must be at least one year")]
    NonPositiveHorizon,
    #[error("max drawdown limit must be non-negative: {value}")]
    NegativeDrawdownLimit { value: f64 },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
