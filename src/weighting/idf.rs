// IDF engine.
//
// idf(t) = ln(N / (1 + df(t))), where N is the number of documents and df(t)
// the number of documents containing t at least once. The +1 keeps the
// value finite when df is zero; a term present in every document gets a
// small negative weight.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::text::Vocabulary;

use super::vector::TermVector;

fn smoothed_idf(num_docs: usize, doc_frequency: usize) -> f64 {
    if num_docs == 0 {
        // No documents, no evidence: ln(0) would be -inf
        return 0.0;
    }
    (num_docs as f64 / (1 + doc_frequency) as f64).ln()
}

/// IDF of a single term over `corpus`.
pub fn idf<D>(term: &str, corpus: &[D]) -> f64
where
    D: AsRef<[String]>,
{
    let doc_frequency = corpus
        .iter()
        .filter(|doc| doc.as_ref().iter().any(|t| t == term))
        .count();
    smoothed_idf(corpus.len(), doc_frequency)
}

/// IDF of every vocabulary term, computed in one pass over the corpus.
pub fn idf_table<D>(corpus: &[D], vocabulary: &Arc<Vocabulary>) -> TermVector<f64>
where
    D: AsRef<[String]>,
{
    let mut doc_frequency = vec![0usize; vocabulary.len()];
    for doc in corpus {
        let distinct: HashSet<usize> = doc
            .as_ref()
            .iter()
            .filter_map(|t| vocabulary.index_of(t))
            .collect();
        for i in distinct {
            doc_frequency[i] += 1;
        }
    }

    let weights = doc_frequency
        .into_iter()
        .map(|df| smoothed_idf(corpus.len(), df))
        .collect();

    debug!(
        documents = corpus.len(),
        terms = vocabulary.len(),
        "Built IDF table"
    );

    TermVector::from_parts(Arc::clone(vocabulary), weights)
}
