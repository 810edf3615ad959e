//! Positional weight vectors for the fuzzy order relation.
//!
//! A ranking of length n has n-1 gaps between adjacent rank positions; weight `k`
//! scales the gap between ranks `k+1` and `k+2`. Presets are shaped over the interior
//! points `x_k = k / n`, `k = 1..n-1`, of the unit interval:
//!
//! | scheme           | weight            | emphasis            |
//! |------------------|-------------------|---------------------|
//! | `uniform`        | 1                 | none                |
//! | `top`            | 1 - x             | head of the ranking |
//! | `bottom`         | x                 | tail of the ranking |
//! | `top_bottom`     | \|1 - 2x\|        | both ends           |
//! | `middle`         | 1 - \|1 - 2x\|    | centre              |
//! | `top_bottom_exp` | 4 (x - 0.5)²      | both ends, smoother |
//!
//! Callers can bypass the presets with an explicit vector (see [`WeightSpec`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use log::{debug, trace};

use crate::error::{GammaError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    #[default]
    Uniform,
    Top,
    Bottom,
    TopBottom,
    Middle,
    TopBottomExp,
}

type Profile = fn(f64) -> f64;

// indexed by `WeightScheme as usize`
const PROFILES: [Profile; 6] = [
    |_| 1.0,
    |x| 1.0 - x,
    |x| x,
    |x| (1.0 - 2.0 * x).abs(),
    |x| 1.0 - (1.0 - 2.0 * x).abs(),
    |x| 4.0 * (x - 0.5) * (x - 0.5),
];

impl WeightScheme {
    pub const ALL: [WeightScheme; 6] = [
        WeightScheme::Uniform,
        WeightScheme::Top,
        WeightScheme::Bottom,
        WeightScheme::TopBottom,
        WeightScheme::Middle,
        WeightScheme::TopBottomExp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeightScheme::Uniform => "uniform",
            WeightScheme::Top => "top",
            WeightScheme::Bottom => "bottom",
            WeightScheme::TopBottom => "top_bottom",
            WeightScheme::Middle => "middle",
            WeightScheme::TopBottomExp => "top_bottom_exp",
        }
    }

    /// Weight assigned to the interior point `x` in (0, 1).
    #[inline]
    pub fn profile(self, x: f64) -> f64 {
        PROFILES[self as usize](x)
    }

    /// Build the `length - 1` gap weights for a ranking of `length` items.
    pub fn generate(self, length: usize) -> Result<Vec<f64>> {
        if length < 2 {
            return Err(GammaError::TooShort(length));
        }
        let weights: Vec<f64> = interior_points(length)
            .into_iter()
            .map(|x| self.profile(x))
            .collect();
        trace!("{} weights for n={}: {:?}", self.name(), length, weights);
        Ok(weights)
    }
}

impl fmt::Display for WeightScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightScheme {
    type Err = GammaError;

    /// Accepts the snake_case names as well as the spaced and hyphenated
    /// spellings (`"top bottom exp"`, `"top-bottom"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        WeightScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == key)
            .ok_or_else(|| GammaError::UnknownPreset(s.to_string()))
    }
}

/// Interior points of a linear space over [0, 1] with `length + 1` samples,
/// endpoints dropped: `k / length` for `k = 1..length`.
pub fn interior_points(length: usize) -> Vec<f64> {
    let n = length as f64;
    (1..length).map(|k| k as f64 / n).collect()
}

pub fn generate_weights(scheme: WeightScheme, length: usize) -> Result<Vec<f64>> {
    scheme.generate(length)
}

/// Where the weight vector of a computation comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightSpec {
    Preset(WeightScheme),
    Explicit(Vec<f64>),
}

impl Default for WeightSpec {
    fn default() -> Self {
        WeightSpec::Preset(WeightScheme::Uniform)
    }
}

impl From<WeightScheme> for WeightSpec {
    fn from(scheme: WeightScheme) -> Self {
        WeightSpec::Preset(scheme)
    }
}

impl From<Vec<f64>> for WeightSpec {
    fn from(weights: Vec<f64>) -> Self {
        WeightSpec::Explicit(weights)
    }
}

impl From<&[f64]> for WeightSpec {
    fn from(weights: &[f64]) -> Self {
        WeightSpec::Explicit(weights.to_vec())
    }
}

impl FromStr for WeightSpec {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<WeightScheme>().map(WeightSpec::Preset)
    }
}

impl WeightSpec {
    /// Produce the weight vector for rankings of `length` items.
    ///
    /// Presets are generated; explicit vectors are checked for length `length - 1`
    /// and for finite, non-negative entries.
    pub fn resolve(&self, length: usize) -> Result<Vec<f64>> {
        match self {
            WeightSpec::Preset(scheme) => scheme.generate(length),
            WeightSpec::Explicit(weights) => {
                if length < 2 {
                    return Err(GammaError::TooShort(length));
                }
                let expected = length - 1;
                if weights.len() != expected {
                    debug!(
                        "rejecting weight vector of length {} for n={}",
                        weights.len(),
                        length
                    );
                    return Err(GammaError::WeightLengthMismatch {
                        expected,
                        actual: weights.len(),
                    });
                }
                if let Some((index, &value)) = weights
                    .iter()
                    .enumerate()
                    .find(|(_, w)| !w.is_finite() || **w < 0.0)
                {
                    return Err(GammaError::InvalidWeight { index, value });
                }
                Ok(weights.clone())
            }
        }
    }
}
