// Reports handed to the reporting sink: terminal display or JSON.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

use crate::corpus::SimilarityScore;
use crate::weighting::{Normalization, Weighting};

/// The highest-weighted terms of one document.
#[derive(Debug, Clone, Serialize)]
pub struct TopTerms<T> {
    pub topic: String,
    pub token_count: usize,
    pub terms: Vec<(String, T)>,
}

/// Raw-frequency and TF-IDF summaries of a corpus.
#[derive(Debug, Clone, Serialize)]
pub struct VectorizeReport {
    pub vocabulary_size: usize,
    pub normalization: Normalization,
    pub raw_frequency: Vec<TopTerms<u64>>,
    pub tfidf: Vec<TopTerms<f64>>,
}

/// First document compared against every other one.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub weighting: Weighting,
    pub normalization: Normalization,
    pub scores: Vec<SimilarityScore>,
}

/// Labels next to the classifier's predictions for the same documents.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub dimension: usize,
    pub embedded_terms: usize,
    pub labels: Vec<String>,
    pub predictions: Vec<String>,
}

impl ClassificationReport {
    /// How many predictions match their label.
    pub fn correct(&self) -> usize {
        self.labels
            .iter()
            .zip(&self.predictions)
            .filter(|(label, predicted)| label == predicted)
            .count()
    }
}

/// Print any report as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Round for display; keeps small reports readable.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
