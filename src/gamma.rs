//! Scaled gamma rank correlation (Henzgen & Hüllermeier, ECML PKDD 2015).
//!
//! Classical Goodman–Kruskal gamma counts concordant and discordant pairs. Here the
//! crisp "i precedes j" indicator is replaced by the fuzzy strict order `R` of
//! [`crate::relation`], and agreement between the two rankings is measured with a
//! t-norm. For every unordered pair `i < j`:
//!
//! ```text
//! a_ij = R(ra[i], ra[j])   a_ji = R(ra[j], ra[i])
//! b_ij = R(rb[i], rb[j])   b_ji = R(rb[j], rb[i])
//!
//! C += T(a_ij, b_ij) + T(a_ji, b_ji)
//! D += T(a_ij, b_ji) + T(a_ji, b_ij)
//! ```
//!
//! and the coefficient is `(C - D) / (C + D)`, undefined when `C + D == 0`.
//!
//! # Examples
//!
//! ```
//! use fuzzy_gamma::{gamma_corr, GammaConfig, WeightScheme};
//!
//! let a = [1, 2, 3, 4, 5];
//! let b = [5, 4, 3, 2, 1];
//! assert_eq!(gamma_corr(&a, &b, &GammaConfig::default()).unwrap(), Some(-1.0));
//!
//! let cfg = GammaConfig::new().with_weights(vec![1.0, 0.75, 0.5, 0.25]);
//! let g = gamma_corr(&[1, 2, 5, 4, 3], &[1, 2, 3, 4, 5], &cfg).unwrap().unwrap();
//! assert!((g - 0.838383).abs() < 1e-6);
//!
//! let top = GammaConfig::new().with_weights(WeightScheme::Top);
//! assert!(gamma_corr(&a, &a, &top).unwrap() == Some(1.0));
//! ```
//!
//! # Performance
//!
//! O(n²) pair evaluations. Clamped-sum aggregation is O(1) per pair through prefix
//! sums; max aggregation scans the rank interval. From
//! [`GammaConfig::parallel_threshold`] items on, rows of the pair triangle are
//! spread over the rayon pool and the partial sums reduced by addition, so results
//! may differ from the sequential path in the last bits.

use std::ops::{Add, AddAssign};

use rayon::prelude::*;
use serde::Serialize;

use log::{debug, trace};

use crate::config::GammaConfig;
use crate::error::Result;
use crate::ranking::{normalize_pair, TiePolicy};
use crate::relation::FuzzyOrder;
use crate::tnorm::TNorm;

/// Raw accumulators of one computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PairStats {
    pub concordance: f64,
    pub discordance: f64,
    /// Fuzzy tie mass: 1 for pairs tied in either ranking, otherwise the co-norm of
    /// the complemented pair distances in both rankings.
    pub ties: f64,
    /// Number of unordered pairs visited.
    pub pairs: usize,
}

impl PairStats {
    /// `(C - D) / (C + D)`, or `None` when no pair carried any order signal.
    pub fn coefficient(&self) -> Option<f64> {
        let denominator = self.concordance + self.discordance;
        if denominator == 0.0 {
            None
        } else {
            Some((self.concordance - self.discordance) / denominator)
        }
    }
}

impl Add for PairStats {
    type Output = PairStats;

    fn add(mut self, rhs: PairStats) -> PairStats {
        self += rhs;
        self
    }
}

impl AddAssign for PairStats {
    fn add_assign(&mut self, rhs: PairStats) {
        self.concordance += rhs.concordance;
        self.discordance += rhs.discordance;
        self.ties += rhs.ties;
        self.pairs += rhs.pairs;
    }
}

/// Add the contributions of pairs `(i, j)`, `j > i`, to `acc`.
#[inline]
fn accumulate_row(
    i: usize,
    ranks_a: &[usize],
    ranks_b: &[usize],
    order: &FuzzyOrder,
    tnorm: TNorm,
    acc: &mut PairStats,
) {
    let (xi, yi) = (ranks_a[i], ranks_b[i]);
    for j in (i + 1)..ranks_a.len() {
        let (xj, yj) = (ranks_a[j], ranks_b[j]);

        let a_ij = order.relation(xi, xj);
        let a_ji = order.relation(xj, xi);
        let b_ij = order.relation(yi, yj);
        let b_ji = order.relation(yj, yi);

        acc.concordance += tnorm.norm(a_ij, b_ij) + tnorm.norm(a_ji, b_ji);
        acc.discordance += tnorm.norm(a_ij, b_ji) + tnorm.norm(a_ji, b_ij);

        acc.ties += if xi == xj || yi == yj {
            1.0
        } else {
            tnorm.conorm(1.0 - order.distance(xi, xj), 1.0 - order.distance(yi, yj))
        };
        acc.pairs += 1;
    }
}

/// Pair loop over already normalized dense ranks.
///
/// # Panics
///
/// Panics if the slices differ in length or a rank is 0 or exceeds
/// `order.max_rank()`. [`gamma_stats`] guarantees both.
pub fn accumulate(
    ranks_a: &[usize],
    ranks_b: &[usize],
    order: &FuzzyOrder,
    tnorm: TNorm,
    parallel: bool,
) -> PairStats {
    assert_eq!(ranks_a.len(), ranks_b.len(), "rank vectors differ in length");
    let n = ranks_a.len();

    if parallel {
        trace!("parallel pair loop over {} rows on {} threads", n, rayon::current_num_threads());
        (0..n)
            .into_par_iter()
            .map(|i| {
                let mut acc = PairStats::default();
                accumulate_row(i, ranks_a, ranks_b, order, tnorm, &mut acc);
                acc
            })
            .reduce(PairStats::default, |a, b| a + b)
    } else {
        let mut acc = PairStats::default();
        for i in 0..n {
            accumulate_row(i, ranks_a, ranks_b, order, tnorm, &mut acc);
        }
        acc
    }
}

/// Validate inputs, resolve weights and return the raw accumulators.
pub fn gamma_stats<T: PartialOrd + Clone>(
    ranking_a: &[T],
    ranking_b: &[T],
    config: &GammaConfig,
) -> Result<PairStats> {
    let (ranks_a, ranks_b) = normalize_pair(ranking_a, ranking_b, config.tie_policy)?;
    let n = ranks_a.len();
    let weights = config.weights.resolve(n)?;

    debug!(
        "gamma over n={}: tnorm={}, aggregator={}, ties={:?}",
        n, config.tnorm, config.aggregator, config.tie_policy
    );

    let order = FuzzyOrder::new(weights, config.aggregator);
    let parallel = n >= config.parallel_threshold;
    let stats = accumulate(&ranks_a, &ranks_b, &order, config.tnorm, parallel);

    debug!(
        "C={:.6}, D={:.6}, ties={:.6} over {} pairs",
        stats.concordance, stats.discordance, stats.ties, stats.pairs
    );
    Ok(stats)
}

/// Weighted fuzzy gamma between two rankings of the same items.
///
/// `Ok(None)` means the coefficient is undefined: no pair contributed any fuzzy
/// order signal (for instance every relevant gap weight is zero).
pub fn gamma_corr<T: PartialOrd + Clone>(
    ranking_a: &[T],
    ranking_b: &[T],
    config: &GammaConfig,
) -> Result<Option<f64>> {
    gamma_stats(ranking_a, ranking_b, config).map(|stats| stats.coefficient())
}

/// Classical (crisp) Goodman–Kruskal gamma; pairs tied in either ranking are skipped.
pub fn goodman_kruskal_gamma<T: PartialOrd + Clone>(
    ranking_a: &[T],
    ranking_b: &[T],
) -> Result<Option<f64>> {
    let (ra, rb) = normalize_pair(ranking_a, ranking_b, TiePolicy::ZeroContribution)?;
    let n = ra.len();

    let mut concordant = 0usize;
    let mut discordant = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            let da = ra[i].cmp(&ra[j]);
            let db = rb[i].cmp(&rb[j]);
            if da.is_eq() || db.is_eq() {
                continue;
            }
            if da == db {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let total = concordant + discordant;
    if total == 0 {
        return Ok(None);
    }
    Ok(Some(
        (concordant as f64 - discordant as f64) / total as f64,
    ))
}
