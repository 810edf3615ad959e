//! Per-call configuration of a gamma computation.
//!
//! `GammaConfig` replaces keyword defaults with named fields; it is built once per
//! call, either through the `with_*` setters or deserialized from JSON.

use serde::{Deserialize, Serialize};

use log::{debug, info};

use crate::aggregator::Aggregator;
use crate::ranking::TiePolicy;
use crate::tnorm::TNorm;
use crate::weights::{WeightScheme, WeightSpec};

/// Ranking length from which the pair loop is sharded across the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Parameters of one gamma computation.
///
/// Defaults: uniform weights, product t-norm, max aggregation, ties contribute
/// nothing, parallel from [`PARALLEL_THRESHOLD`] items.
///
/// Every field has a default, so partial configurations deserialize:
///
/// ```
/// use fuzzy_gamma::{Aggregator, GammaConfig, WeightScheme, WeightSpec};
///
/// let cfg: GammaConfig =
///     serde_json::from_str(r#"{"weights": "top", "aggregator": "clamped_sum"}"#).unwrap();
/// assert_eq!(cfg.weights, WeightSpec::Preset(WeightScheme::Top));
/// assert_eq!(cfg.aggregator, Aggregator::ClampedSum);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GammaConfig {
    pub weights: WeightSpec,
    pub tnorm: TNorm,
    pub aggregator: Aggregator,
    pub tie_policy: TiePolicy,
    pub parallel_threshold: usize,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            weights: WeightSpec::Preset(WeightScheme::Uniform),
            tnorm: TNorm::Product,
            aggregator: Aggregator::Max,
            tie_policy: TiePolicy::ZeroContribution,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl GammaConfig {
    pub fn new() -> Self {
        debug!("Creating GammaConfig with default parameters");
        Self::default()
    }

    /// Preset name, [`WeightScheme`] or explicit `n-1` vector.
    pub fn with_weights(mut self, weights: impl Into<WeightSpec>) -> Self {
        self.weights = weights.into();
        info!("Configuring weights: {:?}", self.weights);
        self
    }

    pub fn with_tnorm(mut self, tnorm: TNorm) -> Self {
        info!("Configuring t-norm: {}", tnorm);
        self.tnorm = tnorm;
        self
    }

    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        info!("Configuring aggregator: {}", aggregator);
        self.aggregator = aggregator;
        self
    }

    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        info!("Configuring tie policy: {:?}", tie_policy);
        self.tie_policy = tie_policy;
        self
    }

    /// Rankings with at least `threshold` items use the parallel pair loop.
    /// `usize::MAX` keeps every computation sequential.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        info!("Setting parallel threshold: {}", threshold);
        self.parallel_threshold = threshold;
        self
    }

    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }
}
