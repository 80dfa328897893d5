// Vocabulary: the ordered term universe shared by every vector of a corpus.

use std::collections::{BTreeSet, HashMap};

/// Deduplicated, lexicographically sorted set of terms.
///
/// The position of a term in `terms()` is its index in every term vector
/// built over this vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary from the union of all documents' tokens.
    ///
    /// Input order does not matter: the same multiset of documents always
    /// yields the same vocabulary.
    pub fn from_documents<D>(documents: &[D]) -> Self
    where
        D: AsRef<[String]>,
    {
        let unique: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.as_ref().iter().map(String::as_str))
            .collect();

        Self::from_sorted(unique.into_iter().map(str::to_string).collect())
    }

    /// Build a vocabulary from an arbitrary list of terms (sorted and deduplicated here).
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        Self::from_sorted(unique.into_iter().collect())
    }

    fn from_sorted(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Position of `term`, or `None` if it is not part of the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Vocabulary {}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_vocabulary_sorted_and_deduplicated() {
        let corpus = docs(&[&["b", "a", "a"], &["c", "b"]]);
        let vocab = Vocabulary::from_documents(&corpus);
        assert_eq!(vocab.terms(), &["a", "b", "c"]);
        assert_eq!(vocab.index_of("b"), Some(1));
        assert_eq!(vocab.index_of("z"), None);
    }

    #[test]
    fn test_vocabulary_independent_of_document_order() {
        let forward = docs(&[&["x", "y"], &["z", "w"]]);
        let reverse = docs(&[&["z", "w"], &["x", "y"]]);
        assert_eq!(
            Vocabulary::from_documents(&forward),
            Vocabulary::from_documents(&reverse)
        );
    }

    #[test]
    fn test_vocabulary_empty_corpus() {
        let corpus: Vec<Vec<String>> = vec![];
        let vocab = Vocabulary::from_documents(&corpus);
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
    }

    #[test]
    fn test_vocabulary_from_terms() {
        let vocab = Vocabulary::from_terms(["c", "a", "c", "b"]);
        assert_eq!(vocab.terms(), &["a", "b", "c"]);
        assert!(vocab.contains("a"));
    }
}
