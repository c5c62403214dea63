//! CSV-backed price store.
//!
//! One `<TICKER>.csv` per ticker with `date,adj_close` rows, plus an
//! optional `rates.csv` with `date,rate_pct` risk-free observations.
//! Rows may arrive unsorted; duplicate dates are rejected.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use time::Date;

use etfsieve_core::{
    parse_date, MemoryPriceSource, PricePoint, PriceSeries, PriceSource, Ticker,
};

use crate::error::CliError;

const RATES_FILE: &str = "rates.csv";

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: String,
    adj_close: f64,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    date: String,
    rate_pct: f64,
}

/// Local price store loaded whole from a directory of CSV files.
#[derive(Debug)]
pub struct CsvPriceStore {
    inner: MemoryPriceSource,
    tickers: Vec<Ticker>,
}

impl CsvPriceStore {
    pub fn load(dir: &Path) -> Result<Self, CliError> {
        let mut inner = MemoryPriceSource::new();
        let mut tickers = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            if path.file_name().and_then(|name| name.to_str()) == Some(RATES_FILE) {
                load_rates(&path, &mut inner)?;
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let ticker = Ticker::parse(stem).map_err(|error| store_error(&path, &error))?;
            let series = load_series(&path, ticker.clone())?;
            inner.insert_series(series);
            tickers.push(ticker);
        }

        tickers.sort();
        Ok(Self { inner, tickers })
    }

    /// Every ticker present in the store, sorted.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }
}

impl PriceSource for CsvPriceStore {
    fn price_series(&self, ticker: &Ticker) -> Option<&PriceSeries> {
        self.inner.price_series(ticker)
    }

    fn risk_free_rate_pct(&self, as_of: Date) -> Option<f64> {
        self.inner.risk_free_rate_pct(as_of)
    }
}

fn load_series(path: &Path, ticker: Ticker) -> Result<PriceSeries, CliError> {
    let mut reader = csv::Reader::from_reader(File::open(path)?);
    let mut points = Vec::new();

    for row in reader.deserialize::<PriceRow>() {
        let row = row?;
        let date = parse_date(&row.date).map_err(|error| store_error(path, &error))?;
        let point =
            PricePoint::new(date, row.adj_close).map_err(|error| store_error(path, &error))?;
        points.push(point);
    }

    points.sort_by(|left, right| left.date.cmp(&right.date));
    PriceSeries::new(ticker, points).map_err(|error| store_error(path, &error))
}

fn load_rates(path: &Path, source: &mut MemoryPriceSource) -> Result<(), CliError> {
    let mut reader = csv::Reader::from_reader(File::open(path)?);
    for row in reader.deserialize::<RateRow>() {
        let row = row?;
        let date = parse_date(&row.date).map_err(|error| store_error(path, &error))?;
        source.insert_rate(date, row.rate_pct);
    }
    Ok(())
}

fn store_error(path: &Path, error: &dyn std::fmt::Display) -> CliError {
    CliError::Store {
        path: PathBuf::from(path),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use time::macros::date;

    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).expect("create file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    #[test]
    fn loads_tickers_and_rates_from_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(
            dir.path(),
            "xic.csv",
            "date,adj_close\n2024-01-03,31.5\n2024-01-02,31.0\n",
        );
        write_file(dir.path(), "rates.csv", "date,rate_pct\n2024-01-01,4.5\n");

        let store = CsvPriceStore::load(dir.path()).expect("store loads");

        assert_eq!(store.tickers().len(), 1);
        let ticker = Ticker::parse("XIC").expect("must parse");
        let series = store.price_series(&ticker).expect("series present");
        // Rows were unsorted in the file; the store sorts them.
        assert_eq!(series.first_date(), Some(date!(2024 - 01 - 02)));
        assert_eq!(store.risk_free_rate_pct(date!(2024 - 06 - 28)), Some(4.5));
    }

    #[test]
    fn duplicate_dates_are_a_store_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(
            dir.path(),
            "dup.csv",
            "date,adj_close\n2024-01-02,31.0\n2024-01-02,31.5\n",
        );

        let err = CsvPriceStore::load(dir.path()).expect_err("must fail");
        assert!(matches!(err, CliError::Store { .. }));
    }

    #[test]
    fn non_csv_files_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "notes.txt", "not a price file");

        let store = CsvPriceStore::load(dir.path()).expect("store loads");
        assert!(store.tickers().is_empty());
    }
}
