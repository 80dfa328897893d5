// TF-IDF composer: elementwise TF * IDF, no normalization.

use std::sync::Arc;

use anyhow::Result;

use super::vector::TermVector;

/// Multiply a TF vector by an IDF vector term by term.
///
/// Both must be over the same vocabulary. The result is not normalized;
/// use [`super::Normalization`] explicitly before comparing if needed.
pub fn tfidf(tf: &TermVector<f64>, idf: &TermVector<f64>) -> Result<TermVector<f64>> {
    if !tf.same_vocabulary(idf) {
        anyhow::bail!(
            "TF vector ({} terms) and IDF vector ({} terms) are over different vocabularies",
            tf.len(),
            idf.len()
        );
    }

    let weights = tf
        .weights()
        .iter()
        .zip(idf.weights())
        .map(|(t, i)| t * i)
        .collect();

    Ok(TermVector::from_parts(Arc::clone(tf.vocabulary()), weights))
}
