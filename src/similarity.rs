// Cosine similarity for term vectors and dense document vectors.
//
// A zero-norm side (an empty document, a document with no embedded tokens)
// means "no signal", so the score is 0.0 instead of a division by zero.
// Comparing vectors of different shape is a caller bug and is rejected.

use anyhow::Result;

use crate::text::Vocabulary;
use crate::weighting::TermVector;

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean length of a slice.
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        0.0
    } else {
        dot(a, b) / denom
    }
}

/// Cosine similarity of two term vectors indexed over `vocabulary`.
///
/// Returns a value in [-1, 1] (in [0, 1] for non-negative weights). Fails if
/// either vector is indexed over a different vocabulary.
pub fn cosine_similarity(
    a: &TermVector<f64>,
    b: &TermVector<f64>,
    vocabulary: &Vocabulary,
) -> Result<f64> {
    if !a.is_over(vocabulary) || !b.is_over(vocabulary) {
        anyhow::bail!(
            "cannot compare term vectors over different vocabularies ({} vs {} terms, expected {})",
            a.len(),
            b.len(),
            vocabulary.len()
        );
    }
    Ok(cosine(a.weights(), b.weights()))
}

/// Cosine similarity of two dense vectors of the same dimension.
pub fn cosine_similarity_dense(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        anyhow::bail!(
            "cannot compare dense vectors of dimension {} and {}",
            a.len(),
            b.len()
        );
    }
    Ok(cosine(a, b))
}
