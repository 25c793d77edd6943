use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use sha2::{Digest, Sha256};

use crate::config::AnalysisParams;
use crate::deviation::compute_deviations;
use crate::error::AnalysisError;
use crate::estimator::{estimate, ProbabilityResult};
use crate::lookahead::compute_lookahead;
use crate::model::PriceSeries;
use crate::normalize::normalize_csv;

/// One full synchronous pass over a normalized series. Any parameter
/// change requires recomputing from here; there is no incremental path.
pub fn run_pipeline(
    series: &PriceSeries,
    params: &AnalysisParams,
) -> Result<ProbabilityResult, AnalysisError> {
    let lookahead = compute_lookahead(series, params.window_length_days);
    let deviations = compute_deviations(&lookahead)?;
    estimate(
        &deviations,
        params.discount_threshold_pct,
        params.premium_threshold_pct,
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    input_digest: String,
    window_length_days: usize,
    discount_bits: u64,
    premium_bits: u64,
}

impl CacheKey {
    fn new(raw: &[u8], params: &AnalysisParams) -> Self {
        Self {
            input_digest: hex::encode(Sha256::digest(raw)),
            window_length_days: params.window_length_days,
            discount_bits: params.discount_threshold_pct.to_bits(),
            premium_bits: params.premium_threshold_pct.to_bits(),
        }
    }
}

/// Memoizes analysis results keyed by a digest of the raw input bytes
/// plus the run parameters. A changed input or parameter set misses the
/// cache by construction. Purely a performance layer: every entry can
/// be recomputed from the raw bytes at any time.
#[derive(Debug, Default)]
pub struct Analyzer {
    cache: Mutex<HashMap<CacheKey, Arc<ProbabilityResult>>>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_csv(
        &self,
        raw: &[u8],
        params: &AnalysisParams,
    ) -> Result<Arc<ProbabilityResult>> {
        params.validate()?;

        let key = CacheKey::new(raw, params);
        if let Some(hit) = self.lookup(&key)? {
            tracing::debug!(digest = %key.input_digest, "analysis cache hit");
            return Ok(hit);
        }

        let series = normalize_csv(raw)?;
        let result = Arc::new(run_pipeline(&series, params)?);
        tracing::debug!(
            digest = %key.input_digest,
            rows = series.len(),
            window = params.window_length_days,
            "analysis computed"
        );

        let mut guard = self
            .cache
            .lock()
            .map_err(|_| anyhow::anyhow!("analysis cache lock poisoned"))?;
        guard.insert(key, result.clone());
        Ok(result)
    }

    fn lookup(&self, key: &CacheKey) -> Result<Option<Arc<ProbabilityResult>>> {
        let guard = self
            .cache
            .lock()
            .map_err(|_| anyhow::anyhow!("analysis cache lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    /// Drop every memoized result.
    pub fn invalidate(&self) -> Result<()> {
        let mut guard = self
            .cache
            .lock()
            .map_err(|_| anyhow::anyhow!("analysis cache lock poisoned"))?;
        guard.clear();
        Ok(())
    }

    pub fn cached_runs(&self) -> Result<usize> {
        let guard = self
            .cache
            .lock()
            .map_err(|_| anyhow::anyhow!("analysis cache lock poisoned"))?;
        Ok(guard.len())
    }
}
