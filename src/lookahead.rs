use chrono::NaiveDate;

use crate::model::PriceSeries;

/// Forward best-case extrema for one trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookaheadRow {
    pub date: NaiveDate,
    pub open: f64,
    pub min_low_forward: f64,
    pub max_high_forward: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookaheadSeries {
    rows: Vec<LookaheadRow>,
}

impl LookaheadSeries {
    pub fn from_rows(rows: Vec<LookaheadRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[LookaheadRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LookaheadRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lowest Low and highest High over the next `window_length_days` rows,
/// current day included. The window shrinks at the series tail instead
/// of going undefined, so every input row yields a value.
pub fn compute_lookahead(series: &PriceSeries, window_length_days: usize) -> LookaheadSeries {
    assert!(window_length_days >= 1, "window_length_days must be >= 1");

    let records = series.records();
    let n = records.len();
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let end = i.saturating_add(window_length_days).min(n);
        let window = &records[i..end];
        let min_low = window.iter().fold(f64::MAX, |acc, r| acc.min(r.low));
        let max_high = window.iter().fold(f64::MIN, |acc, r| acc.max(r.high));
        rows.push(LookaheadRow {
            date: records[i].date,
            open: records[i].open,
            min_low_forward: min_low,
            max_high_forward: max_high,
        });
    }
    LookaheadSeries { rows }
}
