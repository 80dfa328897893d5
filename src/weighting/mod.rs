// Term weighting: raw counts, term frequency, IDF and TF-IDF.
//
// Every vector here is dense over the full corpus vocabulary (zero for
// absent terms), so any two vectors over the same vocabulary line up
// index-for-index.

pub mod frequency;
pub mod idf;
pub mod normalize;
pub mod tfidf;
pub mod vector;

pub use frequency::{raw_count, term_frequency};
pub use idf::{idf, idf_table};
pub use normalize::Normalization;
pub use tfidf::tfidf;
pub use vector::TermVector;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which weighting scheme a term vector is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Integer occurrence counts.
    RawCount,
    /// Counts divided by the document's token count.
    Tf,
    /// TF multiplied by the corpus IDF.
    TfIdf,
}

impl FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "rawcount" | "count" => Ok(Self::RawCount),
            "tf" => Ok(Self::Tf),
            "tfidf" | "tf-idf" => Ok(Self::TfIdf),
            other => Err(format!(
                "unknown weighting '{other}' (expected raw, tf or tfidf)"
            )),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RawCount => "raw",
            Self::Tf => "tf",
            Self::TfIdf => "tfidf",
        };
        f.write_str(name)
    }
}
