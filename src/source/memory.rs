// In-memory document source, keyed by exact topic.

use std::collections::HashMap;

use async_trait::async_trait;

use super::traits::{DocumentSource, FetchOutcome};

#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    texts: HashMap<String, String>,
}

impl StaticDocumentSource {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            texts: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, topic: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(topic.into(), text.into());
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn fetch(&self, topic: &str) -> FetchOutcome {
        match self.texts.get(topic) {
            Some(text) => FetchOutcome::Found(text.clone()),
            None => FetchOutcome::missing(format!("no text registered for '{topic}'")),
        }
    }
}
