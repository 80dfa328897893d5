// Random indexing: a lightweight distributional embedding trainer.
//
// Every retained term gets a sparse ternary "index vector" derived from a
// hash of the term. A term's embedding is the sum of the index vectors of
// its neighbours within `window` positions, over the whole corpus, scaled to
// unit length. Terms that share contexts end up pointing the same way.
//
// Terms seen fewer than `min_count` times get no embedding and are dropped
// before windowing, so they neither receive nor contribute context.

use std::collections::HashMap;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::similarity::norm;

use super::table::EmbeddingTable;
use super::traits::EmbeddingProvider;

/// Random-indexing trainer configuration.
#[derive(Debug, Clone)]
pub struct RandomIndexing {
    /// Context positions considered on each side of a token
    pub window: usize,
    /// Minimum corpus frequency for a term to get an embedding
    pub min_count: usize,
    /// Mixed into every index vector seed; same seed, same table
    pub seed: u64,
}

impl Default for RandomIndexing {
    fn default() -> Self {
        Self {
            window: 5,
            min_count: 2,
            seed: 42,
        }
    }
}

impl RandomIndexing {
    /// Sparse index vector for `term`: `(position, ±1.0)` pairs.
    fn index_vector(&self, term: &str, dimension: usize) -> Vec<(usize, f64)> {
        let digest = Sha256::digest(term.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(head) ^ self.seed);

        let nonzero = (dimension / 10).max(2).min(dimension);
        let positions = rand::seq::index::sample(&mut rng, dimension, nonzero);
        positions
            .into_iter()
            .map(|i| (i, if rng.random_bool(0.5) { 1.0 } else { -1.0 }))
            .collect()
    }
}

impl EmbeddingProvider for RandomIndexing {
    fn train(&self, corpus: &[Vec<String>], dimension: usize) -> Result<EmbeddingTable> {
        if dimension == 0 {
            anyhow::bail!("embedding dimension must be positive");
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for doc in corpus {
            for token in doc {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let index: HashMap<&str, Vec<(usize, f64)>> = counts
            .iter()
            .filter(|&(_, &count)| count >= self.min_count)
            .map(|(&term, _)| (term, self.index_vector(term, dimension)))
            .collect();

        let mut context: HashMap<&str, Vec<f64>> = HashMap::new();
        for doc in corpus {
            let kept: Vec<&str> = doc
                .iter()
                .map(String::as_str)
                .filter(|t| index.contains_key(t))
                .collect();

            for (i, &term) in kept.iter().enumerate() {
                let lo = i.saturating_sub(self.window);
                let hi = i.saturating_add(self.window).min(kept.len() - 1);
                let acc = context
                    .entry(term)
                    .or_insert_with(|| vec![0.0; dimension]);
                for (j, &neighbour) in kept.iter().enumerate().take(hi + 1).skip(lo) {
                    if j == i {
                        continue;
                    }
                    for &(k, sign) in &index[neighbour] {
                        acc[k] += sign;
                    }
                }
            }
        }

        let mut table = EmbeddingTable::new(dimension);
        for (term, index_vector) in &index {
            let mut vector = context
                .remove(term)
                .unwrap_or_else(|| vec![0.0; dimension]);

            // No neighbours at all (single-token documents): fall back to
            // the term's own index vector
            if norm(&vector) == 0.0 {
                for &(k, sign) in index_vector {
                    vector[k] = sign;
                }
            }

            let length = norm(&vector);
            for val in &mut vector {
                *val /= length;
            }
            table.insert(*term, vector)?;
        }

        debug!(
            terms = table.len(),
            dropped = counts.len() - table.len(),
            dimension,
            "Trained random-indexing embeddings"
        );

        Ok(table)
    }
}
