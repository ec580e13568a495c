//! Percentile bands and terminal-value extraction.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::paths::PathGrid;

/// The five percentile levels reported for every time row.
pub const PERCENTILE_LEVELS: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

/// Percentile bands across the simulation dimension, one value per time row.
///
/// At every fixed row `p5 <= p25 <= p50 <= p75 <= p95`, since all five are
/// percentiles of the same sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileSeries {
    pub p5: Vec<f64>,
    pub p25: Vec<f64>,
    pub p50: Vec<f64>,
    pub p75: Vec<f64>,
    pub p95: Vec<f64>,
}

impl PercentileSeries {
    /// Number of time rows covered by the bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.p50.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.p50.is_empty()
    }

    /// All five band values at row `t`, lowest percentile first.
    #[must_use]
    pub fn at_row(&self, t: usize) -> [f64; 5] {
        [
            self.p5[t],
            self.p25[t],
            self.p50[t],
            self.p75[t],
            self.p95[t],
        ]
    }
}

/// Output of [`summarize`]: the bands plus the untouched final row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub percentiles: PercentileSeries,
    pub terminal_values: Vec<f64>,
}

/// Percentile of an ascending-sorted sample, with linear interpolation
/// between order statistics: `rank = level/100 * (n - 1)`, interpolating
/// between the surrounding elements when the rank is fractional. A
/// single-element sample yields that element at every level.
///
/// # Panics
/// Panics if `sorted` is empty.
#[must_use]
pub fn percentile(sorted: &[f64], level: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile of an empty sample");
    let rank = level / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn row_percentiles(row: &[f64]) -> [f64; 5] {
    let mut sorted = row.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    PERCENTILE_LEVELS.map(|level| percentile(&sorted, level))
}

/// Compute the percentile bands for every time row and extract the terminal
/// values. Rows are summarized independently, so the `parallel` feature can
/// fan the work out across rows without changing the result.
#[must_use]
pub fn summarize(grid: &PathGrid) -> DistributionSummary {
    let num_rows = grid.num_rows();

    #[cfg(feature = "parallel")]
    let per_row: Vec<[f64; 5]> = (0..num_rows)
        .into_par_iter()
        .map(|t| row_percentiles(grid.row(t)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let per_row: Vec<[f64; 5]> = (0..num_rows)
        .map(|t| row_percentiles(grid.row(t)))
        .collect();

    let mut percentiles = PercentileSeries {
        p5: Vec::with_capacity(num_rows),
        p25: Vec::with_capacity(num_rows),
        p50: Vec::with_capacity(num_rows),
        p75: Vec::with_capacity(num_rows),
        p95: Vec::with_capacity(num_rows),
    };
    for [p5, p25, p50, p75, p95] in per_row {
        percentiles.p5.push(p5);
        percentiles.p25.push(p25);
        percentiles.p50.push(p50);
        percentiles.p75.push(p75);
        percentiles.p95.push(p95);
    }

    DistributionSummary {
        percentiles,
        terminal_values: grid.terminal_row().to_vec(),
    }
}
