// TermVector: a weight for every term of a vocabulary.

use std::sync::Arc;

use anyhow::Result;

use crate::text::Vocabulary;

/// Dense mapping from each vocabulary term to a weight.
///
/// The vocabulary is shared, so cloning or building many vectors over the
/// same corpus costs one `Vec<T>` each.
#[derive(Debug, Clone)]
pub struct TermVector<T = f64> {
    vocabulary: Arc<Vocabulary>,
    weights: Vec<T>,
}

impl<T: Copy> TermVector<T> {
    /// Wrap `weights`, which must have exactly one entry per vocabulary term.
    pub fn from_weights(vocabulary: Arc<Vocabulary>, weights: Vec<T>) -> Result<Self> {
        if weights.len() != vocabulary.len() {
            anyhow::bail!(
                "term vector has {} weights but the vocabulary has {} terms",
                weights.len(),
                vocabulary.len()
            );
        }
        Ok(Self {
            vocabulary,
            weights,
        })
    }

    pub(crate) fn from_parts(vocabulary: Arc<Vocabulary>, weights: Vec<T>) -> Self {
        debug_assert_eq!(weights.len(), vocabulary.len());
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Weights in vocabulary order.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Weight of `term`, or `None` if the term is outside the vocabulary.
    pub fn get(&self, term: &str) -> Option<T> {
        self.vocabulary.index_of(term).map(|i| self.weights[i])
    }

    /// `(term, weight)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.vocabulary
            .terms()
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Whether `other` is indexed over the identical term sequence.
    pub fn same_vocabulary<U>(&self, other: &TermVector<U>) -> bool {
        Arc::ptr_eq(&self.vocabulary, &other.vocabulary) || *self.vocabulary == *other.vocabulary
    }

    /// Whether this vector is indexed over `vocabulary`.
    pub fn is_over(&self, vocabulary: &Vocabulary) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.vocabulary), vocabulary) || *self.vocabulary == *vocabulary
    }

    /// The `n` highest-weighted terms, highest first.
    ///
    /// Ties keep vocabulary order, so the result is deterministic.
    pub fn top_terms(&self, n: usize) -> Vec<(String, T)>
    where
        T: PartialOrd,
    {
        let mut ranked: Vec<(&str, T)> = self.iter().collect();
        // Stable sort: equal weights stay in lexicographic term order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
            .into_iter()
            .take(n)
            .map(|(term, w)| (term.to_string(), w))
            .collect()
    }
}

impl TermVector<u64> {
    /// Convert integer counts into real-valued weights.
    pub fn to_f64(&self) -> TermVector<f64> {
        TermVector {
            vocabulary: Arc::clone(&self.vocabulary),
            weights: self.weights.iter().map(|&c| c as f64).collect(),
        }
    }

    pub fn total(&self) -> u64 {
        self.weights.iter().sum()
    }
}

impl TermVector<f64> {
    /// All-zero vector over `vocabulary`.
    pub fn zeros(vocabulary: Arc<Vocabulary>) -> Self {
        let weights = vec![0.0; vocabulary.len()];
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Elementwise map into a fresh vector over the same vocabulary.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            vocabulary: Arc::clone(&self.vocabulary),
            weights: self.weights.iter().map(|&w| f(w)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::from_terms(["a", "b", "c"]))
    }

    #[test]
    fn test_from_weights_rejects_wrong_length() {
        assert!(TermVector::from_weights(vocab(), vec![1.0, 2.0]).is_err());
        assert!(TermVector::from_weights(vocab(), vec![1.0, 2.0, 3.0]).is_ok());
    }

    #[test]
    fn test_get_and_iter() {
        let v = TermVector::from_weights(vocab(), vec![0.5, 0.0, 0.25]).unwrap();
        assert_eq!(v.get("a"), Some(0.5));
        assert_eq!(v.get("b"), Some(0.0));
        assert_eq!(v.get("zzz"), None);
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(pairs, vec![("a", 0.5), ("b", 0.0), ("c", 0.25)]);
    }

    #[test]
    fn test_top_terms_ties_keep_vocabulary_order() {
        let v = TermVector::from_weights(vocab(), vec![1.0, 3.0, 1.0]).unwrap();
        let top = v.top_terms(3);
        assert_eq!(top[0], ("b".to_string(), 3.0));
        assert_eq!(top[1], ("a".to_string(), 1.0));
        assert_eq!(top[2], ("c".to_string(), 1.0));
        assert_eq!(v.top_terms(1).len(), 1);
    }

    #[test]
    fn test_same_vocabulary_by_content() {
        let a = TermVector::zeros(vocab());
        let b = TermVector::zeros(vocab());
        let other = TermVector::zeros(Arc::new(Vocabulary::from_terms(["a", "b"])));
        assert!(a.same_vocabulary(&b));
        assert!(!a.same_vocabulary(&other));
    }

    #[test]
    fn test_norm_and_sum() {
        let v = TermVector::from_weights(vocab(), vec![3.0, 4.0, 0.0]).unwrap();
        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert!((v.sum() - 7.0).abs() < 1e-12);
    }
}
