//! Summary statistics of sampled NPV distributions.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Bin count used for NPV histograms (40 edges)
pub const DEFAULT_HISTOGRAM_BINS: usize = 39;

/// Percentile `p` (0.0 - 1.0) of an ascending slice, interpolating linearly
/// between the two nearest ranks.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
    /// Fraction of samples strictly below zero
    pub prob_negative: f64,
}

impl DistributionSummary {
    pub fn from_values(values: &[f64]) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::EmptySample);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let negative = values.iter().filter(|v| **v < 0.0).count();

        let pct = |p| percentile(&sorted, p).ok_or(AnalysisError::EmptySample);

        Ok(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            p5: pct(0.05)?,
            p50: pct(0.50)?,
            p95: pct(0.95)?,
            prob_negative: negative as f64 / n,
        })
    }
}

/// Equal-width histogram; `edges` has one more entry than `counts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Histogram over `[min - 1, max + 1]` of the values
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self, AnalysisError> {
        let min = values.iter().copied().reduce(f64::min).ok_or(AnalysisError::EmptySample)?;
        let max = values.iter().copied().reduce(f64::max).ok_or(AnalysisError::EmptySample)?;

        let bins = bins.max(1);
        let lo = min - 1.0;
        let hi = max + 1.0;
        let width = (hi - lo) / bins as f64;

        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for v in values {
            let idx = ((v - lo) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Ok(Self { edges, counts })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Midpoint of bin `i`
    pub fn center(&self, i: usize) -> f64 {
        f64::midpoint(self.edges[i], self.edges[i + 1])
    }
}
