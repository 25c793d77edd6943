use chrono::NaiveDate;

/// One trading day of raw price data. Values beyond presence are
/// accepted as-is; no range checks are applied here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
}
