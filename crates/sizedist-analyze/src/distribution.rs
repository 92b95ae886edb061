//! Empirical size distributions: histogram (PDF) and cumulative (CDF).

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Default number of equal-width histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 50;

/// Binned count distribution of file sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeHistogram {
    /// Monotonically increasing bin edges; `edges.len() == counts.len() + 1`.
    pub edges: Vec<f64>,
    /// Sample count per bin.
    pub counts: Vec<u64>,
}

impl SizeHistogram {
    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total samples across all bins.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Empirical cumulative distribution over a size sample.
///
/// `probabilities[i] == (i + 1) / n` for the i-th smallest sample;
/// duplicate sizes keep their own distinct ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpiricalCdf {
    /// Sample sorted ascending.
    pub sizes: Vec<u64>,
    /// Cumulative probability per rank, non-decreasing, ending at 1.0.
    pub probabilities: Vec<f64>,
}

impl EmpiricalCdf {
    /// Cumulative probability at the first sample not below `size`,
    /// or 1.0 when `size` exceeds every sample.
    pub fn probability_at(&self, size: u64) -> f64 {
        let idx = self.sizes.partition_point(|&s| s < size);
        self.probabilities.get(idx).copied().unwrap_or(1.0)
    }

    /// Fraction of total bytes held by the largest `fraction` of files.
    pub fn top_fraction_share(&self, fraction: f64) -> f64 {
        let k = ((self.sizes.len() as f64 * fraction) as usize).min(self.sizes.len());
        let total: u64 = self.sizes.iter().sum();
        if total == 0 || k == 0 {
            return 0.0;
        }
        let top: u64 = self.sizes[self.sizes.len() - k..].iter().sum();
        top as f64 / total as f64
    }
}

/// Partition `[min, max]` into `bin_count` equal-width bins and count
/// samples per bin.
///
/// When every sample is equal the range is degenerate; a single bin holding
/// all samples is returned instead of dividing by a zero width.
pub fn histogram(sizes: &[u64], bin_count: usize) -> Result<SizeHistogram, AnalyzeError> {
    let (min, max) = match sizes.iter().minmax() {
        MinMaxResult::NoElements => {
            return Err(AnalyzeError::EmptyInput { what: "histogram" });
        }
        MinMaxResult::OneElement(&v) => (v, v),
        MinMaxResult::MinMax(&min, &max) => (min, max),
    };

    if min == max {
        return Ok(SizeHistogram {
            edges: vec![min as f64, min as f64 + 1.0],
            counts: vec![sizes.len() as u64],
        });
    }

    let bin_count = bin_count.max(1);
    let width = (max - min) as f64 / bin_count as f64;
    let mut edges: Vec<f64> = (0..=bin_count)
        .map(|i| min as f64 + i as f64 * width)
        .collect();
    edges[bin_count] = max as f64;

    let mut counts = vec![0u64; bin_count];
    for &size in sizes {
        let mut idx = ((size - min) as f64 / width) as usize;
        // The maximum sample lands exactly on the upper edge; close the
        // last bin on both sides.
        if idx >= bin_count {
            idx = bin_count - 1;
        }
        counts[idx] += 1;
    }

    Ok(SizeHistogram { edges, counts })
}

/// Sort the sample ascending and assign cumulative probability `(i + 1) / n`
/// to the i-th smallest value.
pub fn empirical_cdf(sizes: &[u64]) -> Result<EmpiricalCdf, AnalyzeError> {
    if sizes.is_empty() {
        return Err(AnalyzeError::EmptyInput { what: "empirical CDF" });
    }

    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();

    let n = sorted.len() as f64;
    let probabilities = (1..=sorted.len()).map(|i| i as f64 / n).collect();

    Ok(EmpiricalCdf {
        sizes: sorted,
        probabilities,
    })
}
