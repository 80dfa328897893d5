// Optional vector normalization applied before comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vector::TermVector;

/// How a weighted vector is scaled before it is compared or reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Leave weights untouched.
    #[default]
    None,
    /// Scale to unit Euclidean length. A zero vector stays zero.
    L2,
}

impl Normalization {
    pub fn apply(self, vector: &TermVector<f64>) -> TermVector<f64> {
        match self {
            Self::None => vector.clone(),
            Self::L2 => {
                let norm = vector.norm();
                if norm == 0.0 {
                    vector.clone()
                } else {
                    vector.map(|w| w / norm)
                }
            }
        }
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "l2" => Ok(Self::L2),
            other => Err(format!("unknown normalization '{other}' (expected none or l2)")),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::L2 => f.write_str("l2"),
        }
    }
}
