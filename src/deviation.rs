use chrono::NaiveDate;

use crate::error::AnalysisError;
use crate::lookahead::LookaheadSeries;

/// Percentage deviation of the forward extrema vs. the same day's open.
/// Negative discount means the market traded below the open within the
/// window; positive premium means it traded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationRow {
    pub date: NaiveDate,
    pub discount_pct: f64,
    pub premium_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviationSeries {
    rows: Vec<DeviationRow>,
}

impl DeviationSeries {
    pub fn from_rows(rows: Vec<DeviationRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DeviationRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviationRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn compute_deviations(lookahead: &LookaheadSeries) -> Result<DeviationSeries, AnalysisError> {
    let mut rows = Vec::with_capacity(lookahead.len());
    for row in lookahead.iter() {
        if row.open == 0.0 {
            return Err(AnalysisError::ZeroOpen(row.date));
        }
        rows.push(DeviationRow {
            date: row.date,
            discount_pct: row.min_low_forward / row.open * 100.0 - 100.0,
            premium_pct: row.max_high_forward / row.open * 100.0 - 100.0,
        });
    }
    Ok(DeviationSeries { rows })
}
