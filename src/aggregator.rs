//! Interval aggregation of gap weights into a rank pseudo-distance.
//!
//! For one-indexed ranks `low < high` the relevant gaps are the weight indices
//! `[low - 1, high - 1)`. Two aggregations are supported:
//! - `Max`: the single most influential gap (eq. 11 in Henzgen & Hüllermeier, 2015);
//! - `ClampedSum`: the accumulated gap weight (eq. 12).
//!
//! Both saturate at 1, so the result is a degree in [0, 1] even for explicit weights
//! above 1. Neither is a true metric. An empty interval aggregates to 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GammaError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregator {
    #[default]
    Max,
    #[serde(alias = "sum")]
    ClampedSum,
}

impl Aggregator {
    pub const ALL: [Aggregator; 2] = [Aggregator::Max, Aggregator::ClampedSum];

    pub fn name(self) -> &'static str {
        match self {
            Aggregator::Max => "max",
            Aggregator::ClampedSum => "clamped_sum",
        }
    }

    /// Aggregate `weights` over the gaps between one-indexed ranks `rank_low` and
    /// `rank_high`.
    ///
    /// # Panics
    ///
    /// Panics if `rank_high - 1` exceeds `weights.len()` or `rank_low` is 0 while
    /// `rank_low < rank_high`.
    #[inline]
    pub fn aggregate(self, weights: &[f64], rank_low: usize, rank_high: usize) -> f64 {
        if rank_low >= rank_high {
            return 0.0;
        }
        let slice = &weights[rank_low - 1..rank_high - 1];
        match self {
            Aggregator::Max => slice.iter().copied().fold(0.0, f64::max).min(1.0),
            Aggregator::ClampedSum => slice.iter().sum::<f64>().min(1.0),
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregator {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "d_max" => Ok(Aggregator::Max),
            "clamped_sum" | "clamped-sum" | "sum" | "d_sum" => Ok(Aggregator::ClampedSum),
            _ => Err(GammaError::UnknownAggregator(s.to_string())),
        }
    }
}

/// Gap weights with prefix sums, so clamped-sum aggregation costs O(1) per pair.
///
/// `prefix[k]` holds the sum of the first `k` weights; it is non-decreasing because
/// all weights are non-negative, hence interval differences are never negative.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalWeights {
    weights: Vec<f64>,
    prefix: Vec<f64>,
}

impl IntervalWeights {
    pub fn new(weights: Vec<f64>) -> Self {
        let mut prefix = Vec::with_capacity(weights.len() + 1);
        let mut acc = 0.0;
        prefix.push(acc);
        for &w in &weights {
            acc += w;
            prefix.push(acc);
        }
        Self { weights, prefix }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Same contract as [`Aggregator::aggregate`] over the stored weights.
    #[inline]
    pub fn aggregate(&self, aggregator: Aggregator, rank_low: usize, rank_high: usize) -> f64 {
        if rank_low >= rank_high {
            return 0.0;
        }
        match aggregator {
            Aggregator::Max => aggregator.aggregate(&self.weights, rank_low, rank_high),
            Aggregator::ClampedSum => {
                (self.prefix[rank_high - 1] - self.prefix[rank_low - 1]).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sums_are_cumulative() {
        let iw = IntervalWeights::new(vec![0.5, 0.25, 0.125]);
        assert_eq!(iw.prefix, vec![0.0, 0.5, 0.75, 0.875]);
        assert_eq!(iw.len(), 3);
        assert!(!iw.is_empty());
    }

    #[test]
    fn heavy_weights_saturate() {
        let w = [2.0, 0.5, 3.0];
        for agg in Aggregator::ALL {
            assert_eq!(agg.aggregate(&w, 1, 2), 1.0);
            assert_eq!(agg.aggregate(&w, 1, 4), 1.0);
            assert_eq!(IntervalWeights::new(w.to_vec()).aggregate(agg, 1, 4), 1.0);
        }
        assert_eq!(Aggregator::Max.aggregate(&w, 2, 3), 0.5);
    }

    #[test]
    fn empty_interval_is_zero() {
        let w = [0.3, 0.9];
        for agg in Aggregator::ALL {
            assert_eq!(agg.aggregate(&w, 2, 2), 0.0);
            assert_eq!(agg.aggregate(&w, 3, 1), 0.0);
            assert_eq!(IntervalWeights::new(w.to_vec()).aggregate(agg, 2, 2), 0.0);
        }
    }
}
