// End-to-end flows over a built corpus.
//
//   tokens -> vocabulary/IDF -> weighted vectors -> similarity
//   tokens -> embedding table -> mean-pooled document vectors -> classifier
//
// Each flow returns a report for the reporting sink and never prints.

use anyhow::{Context, Result};
use tracing::info;

use crate::classify::{LabelClassifier, LinearClassifier};
use crate::corpus::Corpus;
use crate::embeddings::{mean_pool, EmbeddingProvider};
use crate::output::{ClassificationReport, SimilarityReport, TopTerms, VectorizeReport};
use crate::weighting::{Normalization, Weighting};

/// Top raw-frequency and TF-IDF terms of every document.
pub fn vectorize(
    corpus: &Corpus,
    top_n: usize,
    normalization: Normalization,
) -> Result<VectorizeReport> {
    let mut raw_frequency = Vec::with_capacity(corpus.len());
    let mut tfidf = Vec::with_capacity(corpus.len());

    for (i, doc) in corpus.documents().iter().enumerate() {
        raw_frequency.push(TopTerms {
            topic: doc.id.clone(),
            token_count: doc.tokens.len(),
            terms: corpus.raw_counts(i)?.top_terms(top_n),
        });
        tfidf.push(TopTerms {
            topic: doc.id.clone(),
            token_count: doc.tokens.len(),
            terms: corpus
                .weighted(i, Weighting::TfIdf, normalization)?
                .top_terms(top_n),
        });
    }

    Ok(VectorizeReport {
        vocabulary_size: corpus.vocabulary().len(),
        normalization,
        raw_frequency,
        tfidf,
    })
}

/// Cosine similarity of the first document against each of the others.
pub fn compare(
    corpus: &Corpus,
    weighting: Weighting,
    normalization: Normalization,
) -> Result<SimilarityReport> {
    Ok(SimilarityReport {
        weighting,
        normalization,
        scores: corpus.compare_first(weighting, normalization)?,
    })
}

/// Mean-pooled embedding vector for every document, in corpus order.
///
/// Also returns how many terms the trained table embeds.
pub fn document_vectors<P>(
    corpus: &Corpus,
    provider: &P,
    dimension: usize,
) -> Result<(usize, Vec<Vec<f64>>)>
where
    P: EmbeddingProvider + ?Sized,
{
    let table = provider
        .train(&corpus.token_sequences(), dimension)
        .context("Embedding training failed")?;

    let vectors = corpus
        .documents()
        .iter()
        .map(|doc| mean_pool(&doc.tokens, &table, dimension))
        .collect::<Result<Vec<_>>>()?;

    Ok((table.len(), vectors))
}

/// Train embeddings and a classifier on the corpus, using each document's
/// identifier as its label, then predict the label of every document.
pub fn classify<P, C>(
    corpus: &Corpus,
    provider: &P,
    classifier: C,
    dimension: usize,
) -> Result<ClassificationReport>
where
    P: EmbeddingProvider + ?Sized,
    C: LinearClassifier,
{
    let (embedded_terms, vectors) = document_vectors(corpus, provider, dimension)?;
    let labels: Vec<String> = corpus.documents().iter().map(|d| d.id.clone()).collect();

    let model = LabelClassifier::train(classifier, &vectors, &labels)?;
    let predictions = model.predict(&vectors)?;

    info!(
        documents = labels.len(),
        embedded_terms,
        "Classified documents"
    );

    Ok(ClassificationReport {
        dimension,
        embedded_terms,
        labels,
        predictions,
    })
}
