// Embedding provider trait: the swap-ready training abstraction.

use anyhow::Result;

use super::table::EmbeddingTable;

/// Anything that can turn a tokenized corpus into an embedding table.
///
/// Implementations must return a table whose dimension equals `dimension`;
/// callers check this before pooling.
pub trait EmbeddingProvider: Send + Sync {
    /// Train (or look up) embeddings for the terms of `corpus`.
    fn train(&self, corpus: &[Vec<String>], dimension: usize) -> Result<EmbeddingTable>;
}

/// A fixed, pre-built table. Training just hands it back.
impl EmbeddingProvider for EmbeddingTable {
    fn train(&self, _corpus: &[Vec<String>], dimension: usize) -> Result<EmbeddingTable> {
        if self.dimension() != dimension {
            anyhow::bail!(
                "pre-built embedding table has dimension {} but {} was requested",
                self.dimension(),
                dimension
            );
        }
        Ok(self.clone())
    }
}
