//! Triangular norms and their De Morgan dual co-norms.
//!
//! A t-norm is the fuzzy conjunction used to decide how strongly a pair is ordered
//! the same way (or opposite ways) in both rankings. Only the two instances that are
//! meaningful for this coefficient are provided:
//! - product: `T(a, b) = a·b`, `⊥(a, b) = a + b - a·b`
//! - Łukasiewicz: `T(a, b) = max(a + b - 1, 0)`, `⊥(a, b) = min(a + b, 1)`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GammaError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNorm {
    #[default]
    #[serde(alias = "prod")]
    Product,
    #[serde(alias = "luka")]
    Lukasiewicz,
}

impl TNorm {
    pub const ALL: [TNorm; 2] = [TNorm::Product, TNorm::Lukasiewicz];

    pub fn name(self) -> &'static str {
        match self {
            TNorm::Product => "product",
            TNorm::Lukasiewicz => "lukasiewicz",
        }
    }

    #[inline]
    pub fn norm(self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Product => a * b,
            TNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
        }
    }

    #[inline]
    pub fn conorm(self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Product => a + b - a * b,
            TNorm::Lukasiewicz => (a + b).min(1.0),
        }
    }
}

impl fmt::Display for TNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TNorm {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "product" | "prod" => Ok(TNorm::Product),
            "lukasiewicz" | "łukasiewicz" | "luka" => Ok(TNorm::Lukasiewicz),
            _ => Err(GammaError::UnknownTNorm(s.to_string())),
        }
    }
}
