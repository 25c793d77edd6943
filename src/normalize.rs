use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AnalysisError;
use crate::model::{PriceRecord, PriceSeries};

/// Calendar format for the Date column, e.g. "2023-06-17".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Open", "High", "Low"];

/// Bundled daily history used when the caller supplies no file.
static DEFAULT_DATA: &str = include_str!("../data/default.csv");

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
}

/// Parse raw CSV into a date-sorted series. The input is consumed as a
/// reader and never mutated in place; callers that need the raw bytes
/// keep their own copy. Columns beyond Date/Open/High/Low are ignored,
/// so Yahoo Finance exports (Close, Adj Close, Volume) work unchanged.
pub fn normalize_csv<R: Read>(input: R) -> Result<PriceSeries, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AnalysisError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT).map_err(|source| {
            AnalysisError::DateParse {
                value: row.date.clone(),
                source,
            }
        })?;
        records.push(PriceRecord {
            date,
            open: row.open,
            high: row.high,
            low: row.low,
        });
    }

    tracing::debug!(rows = records.len(), "normalized price history");
    Ok(PriceSeries::from_records(records))
}

pub fn normalize_path(path: &Path) -> Result<PriceSeries, AnalysisError> {
    let file = File::open(path)?;
    normalize_csv(file)
}

/// Fallback series compiled into the crate, same schema as uploads.
pub fn bundled_series() -> Result<PriceSeries, AnalysisError> {
    normalize_csv(DEFAULT_DATA.as_bytes())
}
