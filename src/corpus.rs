// Corpus: documents plus the shared vocabulary and IDF table.
//
// Construction is the synchronization point: the vocabulary and IDF weights
// need every document's tokens. After that the corpus is read-only and the
// per-document vectors are derived lazily and cached.

use std::sync::{Arc, OnceLock};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::similarity::cosine_similarity;
use crate::text::{tokenize, Vocabulary};
use crate::weighting::{idf_table, raw_count, term_frequency, tfidf};
use crate::weighting::{Normalization, TermVector, Weighting};

/// A document: identifier (topic label), raw text and its tokens.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub tokens: Vec<String>,
}

impl Document {
    /// Tokenize `text` into a new document. Empty text is fine.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Self {
            id: id.into(),
            text,
            tokens,
        }
    }

    /// A document that already has its tokens.
    pub fn from_tokens(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            tokens,
        }
    }
}

impl AsRef<[String]> for Document {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

/// Cosine score between the reference document and another one.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityScore {
    pub reference: String,
    pub other: String,
    pub score: f64,
}

/// Per-document vector cache, filled on first access.
#[derive(Debug, Default)]
struct Cached {
    raw: OnceLock<TermVector<u64>>,
    tf: OnceLock<TermVector<f64>>,
    tfidf: OnceLock<TermVector<f64>>,
}

/// An ordered collection of documents sharing one vocabulary.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
    vocabulary: Arc<Vocabulary>,
    idf: TermVector<f64>,
    cache: Vec<Cached>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        let vocabulary = Arc::new(Vocabulary::from_documents(&documents));
        let idf = idf_table(&documents, &vocabulary);
        let cache = documents.iter().map(|_| Cached::default()).collect();

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Built corpus"
        );

        Self {
            documents,
            vocabulary,
            idf,
            cache,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// IDF weight of every vocabulary term.
    pub fn idf(&self) -> &TermVector<f64> {
        &self.idf
    }

    /// Token sequences of all documents, in corpus order.
    pub fn token_sequences(&self) -> Vec<Vec<String>> {
        self.documents.iter().map(|d| d.tokens.clone()).collect()
    }

    /// Index of the document with identifier `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    pub fn document(&self, index: usize) -> Result<&Document> {
        match self.documents.get(index) {
            Some(doc) => Ok(doc),
            None => anyhow::bail!(
                "no document at index {index} (corpus has {})",
                self.documents.len()
            ),
        }
    }

    pub fn raw_counts(&self, index: usize) -> Result<&TermVector<u64>> {
        let doc = self.document(index)?;
        Ok(self.cache[index]
            .raw
            .get_or_init(|| raw_count(&doc.tokens, &self.vocabulary)))
    }

    pub fn tf(&self, index: usize) -> Result<&TermVector<f64>> {
        let doc = self.document(index)?;
        Ok(self.cache[index]
            .tf
            .get_or_init(|| term_frequency(&doc.tokens, &self.vocabulary)))
    }

    pub fn tfidf(&self, index: usize) -> Result<&TermVector<f64>> {
        if let Some(cached) = self.cache.get(index).and_then(|c| c.tfidf.get()) {
            return Ok(cached);
        }
        let weighted = tfidf(self.tf(index)?, &self.idf)?;
        Ok(self.cache[index].tfidf.get_or_init(|| weighted))
    }

    /// A fresh real-valued vector for one document under `weighting`,
    /// scaled by `normalization`.
    pub fn weighted(
        &self,
        index: usize,
        weighting: Weighting,
        normalization: Normalization,
    ) -> Result<TermVector<f64>> {
        let vector = match weighting {
            Weighting::RawCount => self.raw_counts(index)?.to_f64(),
            Weighting::Tf => self.tf(index)?.clone(),
            Weighting::TfIdf => self.tfidf(index)?.clone(),
        };
        Ok(normalization.apply(&vector))
    }

    /// Cosine similarity between documents `a` and `b`.
    pub fn similarity(
        &self,
        a: usize,
        b: usize,
        weighting: Weighting,
        normalization: Normalization,
    ) -> Result<f64> {
        let va = self.weighted(a, weighting, normalization)?;
        let vb = self.weighted(b, weighting, normalization)?;
        cosine_similarity(&va, &vb, &self.vocabulary)
    }

    /// Compare the first document against every other one, in corpus order.
    ///
    /// Fewer than two documents yields no scores.
    pub fn compare_first(
        &self,
        weighting: Weighting,
        normalization: Normalization,
    ) -> Result<Vec<SimilarityScore>> {
        let Some(first) = self.documents.first() else {
            return Ok(Vec::new());
        };

        let mut scores = Vec::with_capacity(self.documents.len().saturating_sub(1));
        for (i, other) in self.documents.iter().enumerate().skip(1) {
            let score = self.similarity(0, i, weighting, normalization)?;
            debug!(reference = %first.id, other = %other.id, score, "Compared documents");
            scores.push(SimilarityScore {
                reference: first.id.clone(),
                other: other.id.clone(),
                score,
            });
        }
        Ok(scores)
    }
}
