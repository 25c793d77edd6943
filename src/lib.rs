//! Empirical fill probability analysis for limit orders.
//!
//! Given daily OHLC history, this crate answers: had a limit order been
//! placed at a given discount (buy) or premium (sell) vs. each day's
//! opening price, how often would the next N trading days have filled
//! it? Probabilities are empirical frequency counts over the history,
//! with full distributions exposed as empirical CDFs.
//!
//! Data flows strictly forward through the pipeline:
//! [`normalize::normalize_csv`] -> [`lookahead::compute_lookahead`] ->
//! [`deviation::compute_deviations`] -> [`estimator::estimate`].
//! [`analysis::Analyzer`] wraps the pipeline with a digest-keyed memo
//! table for repeated runs over the same upload.

pub mod analysis;
pub mod config;
pub mod deviation;
pub mod error;
pub mod estimator;
pub mod lookahead;
pub mod model;
pub mod normalize;

pub use analysis::{run_pipeline, Analyzer};
pub use config::{AnalysisParams, Config, LoggingConfig};
pub use deviation::{compute_deviations, DeviationRow, DeviationSeries};
pub use error::AnalysisError;
pub use estimator::{ecdf, estimate, EcdfPoint, ProbabilityResult};
pub use lookahead::{compute_lookahead, LookaheadRow, LookaheadSeries};
pub use model::{PriceRecord, PriceSeries};
pub use normalize::{bundled_series, normalize_csv, normalize_path, DATE_FORMAT};
