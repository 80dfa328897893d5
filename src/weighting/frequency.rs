// Frequency engine: raw counts and term frequency over a vocabulary.

use std::sync::Arc;

use crate::text::Vocabulary;

use super::vector::TermVector;

/// Occurrence count of every vocabulary term in `tokens`.
///
/// Tokens outside the vocabulary are ignored; vocabulary terms missing from
/// `tokens` count zero.
pub fn raw_count(tokens: &[String], vocabulary: &Arc<Vocabulary>) -> TermVector<u64> {
    let mut counts = vec![0u64; vocabulary.len()];
    for token in tokens {
        if let Some(i) = vocabulary.index_of(token) {
            counts[i] += 1;
        }
    }
    TermVector::from_parts(Arc::clone(vocabulary), counts)
}

/// Relative frequency of every vocabulary term in `tokens`.
///
/// The denominator is `max(1, tokens.len())`, so an empty document yields
/// the all-zero vector.
pub fn term_frequency(tokens: &[String], vocabulary: &Arc<Vocabulary>) -> TermVector<f64> {
    let total = tokens.len().max(1) as f64;
    raw_count(tokens, vocabulary).to_f64().map(|count| count / total)
}
