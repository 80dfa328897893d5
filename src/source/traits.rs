// Document source trait: the swap-ready fetch abstraction.

use async_trait::async_trait;

/// Result of asking a source for one topic's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(String),
    /// The source could not provide the text; `reason` is for logs only.
    Missing { reason: String },
}

impl FetchOutcome {
    pub fn missing(reason: impl Into<String>) -> Self {
        Self::Missing {
            reason: reason.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The text, or an empty string if the fetch failed.
    pub fn into_text(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::Missing { .. } => String::new(),
        }
    }
}

/// Trait for sources of raw document text. Async because real sources
/// usually do I/O.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw text for `topic`. Never fails: problems are reported
    /// as `FetchOutcome::Missing`.
    async fn fetch(&self, topic: &str) -> FetchOutcome;
}
