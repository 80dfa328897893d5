// Filesystem document source.
//
// Topics map to `<root>/<language>/<slug>.txt`, where the slug is the
// lowercased topic with whitespace runs replaced by underscores
// ("Black hole" -> "black_hole.txt"). Path separators also become
// underscores, so a topic always names a file directly under
// `<root>/<language>`. The language is explicit configuration, not
// process-wide state.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::traits::{DocumentSource, FetchOutcome};

#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    root: PathBuf,
    language: String,
}

/// File stem for a topic.
pub fn slug(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect()
}

impl FileDocumentSource {
    pub fn new(root: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            language: language.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Where the text for `topic` is expected to live.
    pub fn path_for(&self, topic: &str) -> PathBuf {
        self.root
            .join(&self.language)
            .join(format!("{}.txt", slug(topic)))
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch(&self, topic: &str) -> FetchOutcome {
        let slug = slug(topic);
        if slug.is_empty() {
            return FetchOutcome::missing("empty topic");
        }

        let path = self.path_for(topic);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!(topic, path = %path.display(), bytes = text.len(), "Read document");
                FetchOutcome::Found(text)
            }
            Err(e) => FetchOutcome::missing(format!("{}: {}", path.display(), e)),
        }
    }
}
