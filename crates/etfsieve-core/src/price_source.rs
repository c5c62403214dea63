use std::collections::HashMap;

use time::Date;

use crate::{PriceSeries, Ticker};

/// Collaborator boundary for historical price and rate data.
///
/// An absent series is a normal outcome: a broad ticker universe is
/// expected to have partial coverage.
pub trait PriceSource {
    fn price_series(&self, ticker: &Ticker) -> Option<&PriceSeries>;

    /// Annualized risk-free rate (percent) in effect at `as_of`.
    fn risk_free_rate_pct(&self, as_of: Date) -> Option<f64>;
}

/// In-memory `PriceSource` backed by maps; used by tests and local stores.
#[derive(Debug, Default)]
pub struct MemoryPriceSource {
    series: HashMap<Ticker, PriceSeries>,
    rates: Vec<(Date, f64)>,
}

impl MemoryPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_series(&mut self, series: PriceSeries) {
        self.series.insert(series.ticker().clone(), series);
    }

    /// Record a risk-free rate observation (annualized percent).
    pub fn insert_rate(&mut self, date: Date, rate_pct: f64) {
        self.rates.push((date, rate_pct));
        self.rates
            .sort_by(|(left, _), (right, _)| left.cmp(right));
    }
}

impl PriceSource for MemoryPriceSource {
    fn price_series(&self, ticker: &Ticker) -> Option<&PriceSeries> {
        self.series.get(ticker)
    }

    fn risk_free_rate_pct(&self, as_of: Date) -> Option<f64> {
        self.rates
            .iter()
            .rev()
            .find(|(date, _)| *date <= as_of)
            .map(|(_, rate)| *rate)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::PricePoint;

    #[test]
    fn absent_series_is_none() {
        let source = MemoryPriceSource::new();
        let ticker = Ticker::parse("ZZZZ").expect("must parse");
        assert!(source.price_series(&ticker).is_none());
    }

    #[test]
    fn resolves_latest_rate_on_or_before_as_of() {
        let mut source = MemoryPriceSource::new();
        source.insert_rate(date!(2024 - 03 - 01), 4.5);
        source.insert_rate(date!(2024 - 01 - 01), 5.0);

        assert_eq!(source.risk_free_rate_pct(date!(2024 - 02 - 01)), Some(5.0));
        assert_eq!(source.risk_free_rate_pct(date!(2024 - 06 - 01)), Some(4.5));
        assert_eq!(source.risk_free_rate_pct(date!(2023 - 12 - 31)), None);
    }

    #[test]
    fn stores_and_returns_series() {
        let mut source = MemoryPriceSource::new();
        let ticker = Ticker::parse("XIC").expect("must parse");
        let series = PriceSeries::new(
            ticker.clone(),
            vec![PricePoint::new(date!(2024 - 01 - 02), 10.0).expect("valid")],
        )
        .expect("valid series");
        source.insert_series(series);

        let stored = source.price_series(&ticker).expect("series present");
        assert_eq!(stored.len(), 1);
    }
}
