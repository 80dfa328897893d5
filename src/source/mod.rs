// Document sources: where raw text comes from.
//
// Fetching is an external concern. A source reports success or failure as a
// value (FetchOutcome); the core treats a failure as an empty document and
// moves on, so one missing topic never aborts a run.

pub mod filesystem;
pub mod memory;
pub mod traits;

pub use filesystem::FileDocumentSource;
pub use memory::StaticDocumentSource;
pub use traits::{DocumentSource, FetchOutcome};

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::corpus::Document;

/// Fetch and tokenize every topic, up to `concurrency` at a time.
///
/// Documents come back in the order of `topics`. A topic the source cannot
/// provide becomes an empty document.
pub async fn load_documents(
    source: &dyn DocumentSource,
    topics: &[String],
    concurrency: usize,
) -> Vec<Document> {
    let documents: Vec<Document> = stream::iter(topics.iter().map(|topic| async move {
        let outcome = source.fetch(topic).await;
        if let FetchOutcome::Missing { reason } = &outcome {
            warn!(
                topic = topic.as_str(),
                reason = reason.as_str(),
                "Document unavailable, using empty text"
            );
        }
        Document::new(topic.clone(), outcome.into_text())
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;

    info!(
        documents = documents.len(),
        empty = documents.iter().filter(|d| d.tokens.is_empty()).count(),
        "Loaded documents"
    );

    documents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_documents_preserves_order_and_degrades() {
        let source = StaticDocumentSource::from_pairs([
            ("Galaxy", "A galaxy is a system of stars."),
            ("Nebula", "A nebula is a cloud of dust."),
        ]);
        let topics: Vec<String> = ["Nebula", "Missing", "Galaxy"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let docs = load_documents(&source, &topics, 2).await;
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].id, "Nebula");
        assert_eq!(docs[1].id, "Missing");
        assert!(docs[1].tokens.is_empty());
        assert_eq!(docs[2].id, "Galaxy");
        assert_eq!(docs[2].tokens[1], "galaxy");
    }

    #[tokio::test]
    async fn test_load_documents_zero_concurrency_still_runs() {
        let source = StaticDocumentSource::from_pairs([("a", "x")]);
        let docs = load_documents(&source, &["a".to_string()], 0).await;
        assert_eq!(docs[0].tokens, vec!["x"]);
    }
}
