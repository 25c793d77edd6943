use crate::deviation::DeviationSeries;
use crate::error::AnalysisError;

/// One step of an empirical CDF: the fraction of observed values at or
/// below `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcdfPoint {
    pub value: f64,
    pub cumulative_fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityResult {
    /// Percentage of days on which a buy limit at the given discount
    /// would have filled within the window, in [0, 100].
    pub fill_probability_discount: f64,
    /// Same for a sell limit at the given premium.
    pub fill_probability_premium: f64,
    pub ecdf_discount: Vec<EcdfPoint>,
    pub ecdf_premium: Vec<EcdfPoint>,
}

/// Empirical fill probabilities plus the full distribution of observed
/// deviations. Every row counts in the denominator, including tail rows
/// whose lookahead window was clipped.
pub fn estimate(
    deviations: &DeviationSeries,
    discount_threshold_pct: f64,
    premium_threshold_pct: f64,
) -> Result<ProbabilityResult, AnalysisError> {
    if deviations.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    let total = deviations.len() as f64;

    // Discounts are stored as signed deviations (negative = dropped),
    // so a "discount of x%" compares against the negated threshold.
    let discount_hits = deviations
        .iter()
        .filter(|r| r.discount_pct <= -discount_threshold_pct)
        .count();
    let premium_hits = deviations
        .iter()
        .filter(|r| r.premium_pct >= premium_threshold_pct)
        .count();

    let discounts: Vec<f64> = deviations.iter().map(|r| r.discount_pct).collect();
    let premiums: Vec<f64> = deviations.iter().map(|r| r.premium_pct).collect();

    Ok(ProbabilityResult {
        fill_probability_discount: discount_hits as f64 / total * 100.0,
        fill_probability_premium: premium_hits as f64 / total * 100.0,
        ecdf_discount: ecdf(discounts),
        ecdf_premium: ecdf(premiums),
    })
}

/// Empirical CDF with one step per distinct value. A run of ties
/// collapses into a single point carrying the cumulative fraction of
/// the last tied sample, so the final point is exactly 1.0.
pub fn ecdf(mut values: Vec<f64>) -> Vec<EcdfPoint> {
    values.sort_by(f64::total_cmp);
    let total = values.len() as f64;
    let mut points: Vec<EcdfPoint> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let cumulative_fraction = (i + 1) as f64 / total;
        match points.last_mut() {
            Some(last) if last.value == *value => last.cumulative_fraction = cumulative_fraction,
            _ => points.push(EcdfPoint {
                value: *value,
                cumulative_fraction,
            }),
        }
    }
    points
}
