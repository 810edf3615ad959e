//! Error taxonomy for gamma computations.
//!
//! Two families of failure are raised at call entry, before any pair is evaluated:
//! - configuration errors: an unusable preset, t-norm, aggregator or weight vector;
//! - domain errors: the rankings themselves cannot be compared.
//!
//! An undefined coefficient (no pair carries any fuzzy order signal) is not an error;
//! it is reported as `Ok(None)` by the correlation engine.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GammaError>;

/// Coarse classification of a [`GammaError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Domain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration error"),
            ErrorKind::Domain => write!(f, "domain error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GammaError {
    #[error("weighting mode \"{0}\" not defined")]
    UnknownPreset(String),

    #[error("t-norm \"{0}\" not defined (expected product or lukasiewicz)")]
    UnknownTNorm(String),

    #[error("aggregator \"{0}\" not defined (expected max or clamped_sum)")]
    UnknownAggregator(String),

    #[error("length of weight vector is {actual}, expected n-1 = {expected}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    #[error("weight at index {index} is {value}, weights must be finite and non-negative")]
    InvalidWeight { index: usize, value: f64 },

    #[error("a ranking needs at least 2 items, got {0}")]
    TooShort(usize),

    #[error("ranking_a has {left} items but ranking_b has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error(
        "ranking_a and ranking_b range over different item sets \
         ({left_distinct} vs {right_distinct} distinct values)"
    )]
    ItemSetMismatch {
        left_distinct: usize,
        right_distinct: usize,
    },

    #[error("{ranking} has an incomparable value at position {position}")]
    Incomparable {
        ranking: &'static str,
        position: usize,
    },

    #[error("{ranking} ties positions {first} and {second}")]
    TiedRanks {
        ranking: &'static str,
        first: usize,
        second: usize,
    },

    #[error("{0:?} is not a permutation of 1..=n")]
    NotPermutation(Vec<usize>),
}

impl GammaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GammaError::UnknownPreset(_)
            | GammaError::UnknownTNorm(_)
            | GammaError::UnknownAggregator(_)
            | GammaError::WeightLengthMismatch { .. }
            | GammaError::InvalidWeight { .. } => ErrorKind::Configuration,
            GammaError::TooShort(_)
            | GammaError::LengthMismatch { .. }
            | GammaError::ItemSetMismatch { .. }
            | GammaError::Incomparable { .. }
            | GammaError::TiedRanks { .. }
            | GammaError::NotPermutation(_) => ErrorKind::Domain,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}
