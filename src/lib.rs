//! # fuzzy-gamma
//!
//! Weighted rank correlation based on fuzzy order relations, after
//! Henzgen, S. and Hüllermeier, E. (2015): *Weighted Rank Correlation: A Flexible
//! Approach Based on Fuzzy Order Relations*, ECML PKDD 2015.
//!
//! The coefficient generalizes Goodman–Kruskal's gamma: each pair of items is ordered
//! to a degree that depends on where in the ranking the two items sit, as set by a
//! per-gap weight vector, and agreement across the two rankings is measured with a
//! t-norm. Values lie in [-1, 1]; `None` marks the undefined case.
//!
//! Layers, leaves first:
//! - [`weights`]: preset or explicit gap weights;
//! - [`aggregator`] and [`relation`]: interval pseudo-distance and the strict fuzzy
//!   order `R`;
//! - [`gamma`]: the pair loop, accumulation and normalization.
//!
//! ```
//! use fuzzy_gamma::{gamma_corr, Aggregator, GammaConfig, TNorm, WeightScheme};
//!
//! let cfg = GammaConfig::new()
//!     .with_weights(WeightScheme::Top)
//!     .with_tnorm(TNorm::Lukasiewicz)
//!     .with_aggregator(Aggregator::ClampedSum);
//!
//! let g = gamma_corr(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0], &cfg).unwrap();
//! assert!(g.is_some());
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod gamma;
pub mod ranking;
pub mod relation;
pub mod tnorm;
pub mod weights;

pub use aggregator::{Aggregator, IntervalWeights};
pub use config::{GammaConfig, PARALLEL_THRESHOLD};
pub use error::{ErrorKind, GammaError, Result};
pub use gamma::{accumulate, gamma_corr, gamma_stats, goodman_kruskal_gamma, PairStats};
pub use ranking::{dense_rank, normalize_pair, same_item_set, to_ordering, to_ranking, TiePolicy};
pub use relation::{strict_order, FuzzyOrder};
pub use tnorm::TNorm;
pub use weights::{generate_weights, WeightScheme, WeightSpec};

#[cfg(test)]
mod tests;
