//! Strict fuzzy order relation R over one-indexed ranks.
//!
//! `R(x, y)` is the degree to which rank `x` strictly precedes rank `y`: zero unless
//! `x < y`, otherwise the aggregated gap weight between the two ranks. The relation
//! is antisymmetric and vanishes on ties.

use crate::aggregator::{Aggregator, IntervalWeights};

/// `R(rank_x, rank_y)` evaluated directly on a weight slice.
#[inline]
pub fn strict_order(rank_x: usize, rank_y: usize, weights: &[f64], aggregator: Aggregator) -> f64 {
    if rank_x >= rank_y {
        0.0
    } else {
        aggregator.aggregate(weights, rank_x, rank_y)
    }
}

/// Fuzzy order over a fixed, validated weight vector.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyOrder {
    weights: IntervalWeights,
    aggregator: Aggregator,
}

impl FuzzyOrder {
    pub fn new(weights: Vec<f64>, aggregator: Aggregator) -> Self {
        Self {
            weights: IntervalWeights::new(weights),
            aggregator,
        }
    }

    pub fn weights(&self) -> &[f64] {
        self.weights.weights()
    }

    pub fn aggregator(&self) -> Aggregator {
        self.aggregator
    }

    /// Largest rank this order can compare, `weights.len() + 1`.
    pub fn max_rank(&self) -> usize {
        self.weights.len() + 1
    }

    #[inline]
    pub fn relation(&self, rank_x: usize, rank_y: usize) -> f64 {
        if rank_x >= rank_y {
            0.0
        } else {
            self.weights.aggregate(self.aggregator, rank_x, rank_y)
        }
    }

    /// Order-free pseudo-distance between two ranks.
    #[inline]
    pub fn distance(&self, rank_x: usize, rank_y: usize) -> f64 {
        self.weights
            .aggregate(self.aggregator, rank_x.min(rank_y), rank_x.max(rank_y))
    }
}
