//! Input adapter: raw sequences to dense one-indexed ranks.
//!
//! Raw rankings may hold any totally ordered labels (scores, ranks, floats). Before
//! the correlation engine sees them they are validated and replaced by dense ranks:
//! equal values share a rank and ranks are consecutive from 1, so the largest rank is
//! the number of distinct values and never exceeds n.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use log::{debug, trace};

use crate::error::{GammaError, Result};

/// What to do with tied values inside one ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Tied items keep a shared dense rank; their pair carries no order signal.
    #[default]
    ZeroContribution,
    /// Any tie is a domain error.
    Reject,
}

fn rank_labeled<T: PartialOrd>(values: &[T], label: &'static str) -> Result<Vec<usize>> {
    if let Some(position) = values.iter().position(|v| v.partial_cmp(v).is_none()) {
        return Err(GammaError::Incomparable {
            ranking: label,
            position,
        });
    }

    let n = values.len();
    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0usize; n];
    let mut rank = 0usize;
    for (k, &idx) in indices.iter().enumerate() {
        if k == 0 || values[indices[k - 1]] != values[idx] {
            rank += 1;
        }
        ranks[idx] = rank;
    }
    trace!("{} dense ranks: {:?}", label, ranks);
    Ok(ranks)
}

/// Dense one-indexed ranks of `values`; fails on values that are not comparable
/// with themselves (NaN).
pub fn dense_rank<T: PartialOrd>(values: &[T]) -> Result<Vec<usize>> {
    rank_labeled(values, "ranking")
}

fn distinct_sorted<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v.dedup_by(|a, b| a == b);
    v
}

/// True when both sequences hold the same set of distinct values.
pub fn same_item_set<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> bool {
    let da = distinct_sorted(a);
    let db = distinct_sorted(b);
    da.len() == db.len() && da.iter().zip(db.iter()).all(|(x, y)| x == y)
}

/// Positions of the first pair of equal ranks, if any: the earliest position that
/// repeats a rank, together with where that rank first appeared.
pub fn first_tie(ranks: &[usize]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by_key(|&pos| (ranks[pos], pos));
    order
        .windows(2)
        .filter(|w| ranks[w[0]] == ranks[w[1]])
        .map(|w| (w[0], w[1]))
        .fold(None, |best: Option<(usize, usize)>, pair| match best {
            Some(b) if b.1 <= pair.1 => Some(b),
            _ => Some(pair),
        })
}

/// Validate two raw rankings and return their dense ranks.
///
/// Checks, in order: equal length, at least two items, comparable values, identical
/// item sets and, under [`TiePolicy::Reject`], absence of ties.
pub fn normalize_pair<T: PartialOrd + Clone>(
    ranking_a: &[T],
    ranking_b: &[T],
    policy: TiePolicy,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if ranking_a.len() != ranking_b.len() {
        return Err(GammaError::LengthMismatch {
            left: ranking_a.len(),
            right: ranking_b.len(),
        });
    }
    if ranking_a.len() < 2 {
        return Err(GammaError::TooShort(ranking_a.len()));
    }

    let ranks_a = rank_labeled(ranking_a, "ranking_a")?;
    let ranks_b = rank_labeled(ranking_b, "ranking_b")?;

    if !same_item_set(ranking_a, ranking_b) {
        let left_distinct = ranks_a.iter().copied().max().unwrap_or(0);
        let right_distinct = ranks_b.iter().copied().max().unwrap_or(0);
        debug!(
            "item sets differ: {} vs {} distinct values",
            left_distinct, right_distinct
        );
        return Err(GammaError::ItemSetMismatch {
            left_distinct,
            right_distinct,
        });
    }

    if policy == TiePolicy::Reject {
        for (label, ranks) in [("ranking_a", &ranks_a), ("ranking_b", &ranks_b)] {
            if let Some((first, second)) = first_tie(ranks) {
                return Err(GammaError::TiedRanks {
                    ranking: label,
                    first,
                    second,
                });
            }
        }
    }

    Ok((ranks_a, ranks_b))
}

fn invert_permutation(perm: &[usize]) -> Result<Vec<usize>> {
    let n = perm.len();
    let mut inverse = vec![0usize; n];
    for (pos, &v) in perm.iter().enumerate() {
        if v == 0 || v > n || inverse[v - 1] != 0 {
            return Err(GammaError::NotPermutation(perm.to_vec()));
        }
        inverse[v - 1] = pos + 1;
    }
    Ok(inverse)
}

/// Ranking of each item from an ordering that lists item ids (1..=n) best first.
pub fn to_ranking(ordering: &[usize]) -> Result<Vec<usize>> {
    invert_permutation(ordering)
}

/// Ordering (item ids best first) from the rank of each item.
pub fn to_ordering(ranking: &[usize]) -> Result<Vec<usize>> {
    invert_permutation(ranking)
}
