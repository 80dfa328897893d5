// Text normalization: tokenization and vocabulary construction.
//
// Everything downstream (term vectors, embeddings) is defined over the
// tokens produced here, so both stages are deterministic and locale-free.

pub mod tokenizer;
pub mod vocabulary;

pub use tokenizer::tokenize;
pub use vocabulary::Vocabulary;
