// docvec: document vectorization, similarity and classification.
//
// This is the library root. Data flows strictly forward:
//   text -> tokens -> (vocabulary, counts) -> weighted vectors
//        -> { cosine similarity | embeddings -> classifier }
// Fetching text (source) and displaying results (output) are the edges.

pub mod classify;
pub mod config;
pub mod corpus;
pub mod embeddings;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod source;
pub mod text;
pub mod weighting;
