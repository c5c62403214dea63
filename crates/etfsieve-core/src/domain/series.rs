use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Ticker, ValidationError};

/// One adjusted-close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub adj_close: f64,
}

impl PricePoint {
    pub fn new(date: Date, adj_close: f64) -> Result<Self, ValidationError> {
        if !adj_close.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "adj_close" });
        }
        if adj_close < 0.0 {
            return Err(ValidationError::NegativeValue { field: "adj_close" });
        }
        Ok(Self { date, adj_close })
    }
}

/// Ordered adjusted-close history for one ticker.
///
/// Dates are strictly increasing. Missing trading days are simply
/// absent; they are never interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    ticker: Ticker,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(ticker: Ticker, points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::PriceOutOfOrder { index: index + 1 });
            }
        }
        Ok(Self { ticker, points })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date of the earliest observation, if any.
    pub fn first_date(&self) -> Option<Date> {
        self.points.first().map(|point| point.date)
    }

    /// All observations dated on or before `as_of`.
    pub fn up_to(&self, as_of: Date) -> &[PricePoint] {
        let end = self.points.partition_point(|point| point.date <= as_of);
        &self.points[..end]
    }

    /// Observations inside the inclusive `[start, end]` window.
    pub fn window(&self, start: Date, end: Date) -> &[PricePoint] {
        let lo = self.points.partition_point(|point| point.date < start);
        let hi = self.points.partition_point(|point| point.date <= end);
        &self.points[lo..hi.max(lo)]
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn series(prices: &[(Date, f64)]) -> PriceSeries {
        let ticker = Ticker::parse("XIC").expect("must parse");
        let points = prices
            .iter()
            .map(|&(date, price)| PricePoint::new(date, price).expect("valid point"))
            .collect();
        PriceSeries::new(ticker, points).expect("valid series")
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let ticker = Ticker::parse("XIC").expect("must parse");
        let points = vec![
            PricePoint::new(date!(2024 - 01 - 03), 10.0).expect("valid"),
            PricePoint::new(date!(2024 - 01 - 02), 11.0).expect("valid"),
        ];
        let err = PriceSeries::new(ticker, points).expect_err("must fail");
        assert!(matches!(err, ValidationError::PriceOutOfOrder { index: 1 }));
    }

    #[test]
    fn rejects_non_finite_price() {
        let err = PricePoint::new(date!(2024 - 01 - 02), f64::NAN).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteValue { field: "adj_close" }
        ));
    }

    #[test]
    fn slices_history_up_to_date() {
        let series = series(&[
            (date!(2024 - 01 - 02), 10.0),
            (date!(2024 - 01 - 03), 11.0),
            (date!(2024 - 01 - 04), 12.0),
        ]);
        let head = series.up_to(date!(2024 - 01 - 03));
        assert_eq!(head.len(), 2);
        assert_eq!(head.last().expect("non-empty").adj_close, 11.0);
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let series = series(&[
            (date!(2024 - 01 - 02), 10.0),
            (date!(2024 - 01 - 03), 11.0),
            (date!(2024 - 01 - 04), 12.0),
            (date!(2024 - 01 - 05), 13.0),
        ]);
        let window = series.window(date!(2024 - 01 - 03), date!(2024 - 01 - 04));
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].adj_close, 11.0);
        assert_eq!(window[1].adj_close, 12.0);
    }

    #[test]
    fn empty_window_when_range_misses_all_points() {
        let series = series(&[(date!(2024 - 01 - 02), 10.0)]);
        assert!(series
            .window(date!(2024 - 02 - 01), date!(2024 - 03 - 01))
            .is_empty());
    }
}
