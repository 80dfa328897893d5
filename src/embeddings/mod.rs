// Word embeddings: tables, providers, and mean pooling into document vectors.
//
// The training procedure sits behind the EmbeddingProvider trait so it can
// be swapped (random indexing by default, or a table loaded from a
// word2vec/GloVe text file) without touching the rest of the pipeline.

pub mod pooling;
pub mod random_indexing;
pub mod table;
pub mod traits;

pub use pooling::{mean_embedding, mean_pool};
pub use random_indexing::RandomIndexing;
pub use table::EmbeddingTable;
pub use traits::EmbeddingProvider;
