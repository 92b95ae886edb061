//! Descriptive statistics over the file-size sample.

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Summary statistics for a size sample.
///
/// Standard deviation is the population definition (divide by n), and
/// percentiles interpolate linearly between closest ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Compute the summary statistics for a non-empty size sample.
pub fn summarize(sizes: &[u64]) -> Result<SizeSummary, AnalyzeError> {
    if sizes.is_empty() {
        return Err(AnalyzeError::EmptyInput { what: "summary statistics" });
    }

    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();

    let n = sorted.len() as f64;
    let mean = sorted.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|&s| {
            let delta = s as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;

    let p50 = percentile(&sorted, 50.0)?;

    Ok(SizeSummary {
        mean,
        median: p50,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        p25: percentile(&sorted, 25.0)?,
        p50,
        p75: percentile(&sorted, 75.0)?,
        p90: percentile(&sorted, 90.0)?,
        p95: percentile(&sorted, 95.0)?,
        p99: percentile(&sorted, 99.0)?,
    })
}

/// Interpolated percentile over an ascending-sorted sample.
///
/// The rank `q / 100 * (n - 1)` is split into its integer neighbors and the
/// value is interpolated linearly between them.
pub fn percentile(sorted: &[u64], q: f64) -> Result<f64, AnalyzeError> {
    if sorted.is_empty() {
        return Err(AnalyzeError::EmptyInput { what: "percentile" });
    }

    let q = q.clamp(0.0, 100.0);
    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let lo_value = sorted[lo] as f64;
    let hi_value = sorted[hi] as f64;

    Ok(lo_value + (hi_value - lo_value) * (rank - lo as f64))
}
