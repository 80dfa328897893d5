// Mean pooling: many word vectors -> one document vector.

use anyhow::Result;

use super::table::EmbeddingTable;

/// Elementwise mean of `embeddings`, each of length `dimension`.
///
/// No embeddings gives the zero vector of `dimension`; a vector of any other
/// length is rejected.
pub fn mean_embedding<V>(embeddings: &[V], dimension: usize) -> Result<Vec<f64>>
where
    V: AsRef<[f64]>,
{
    let mut mean = vec![0.0_f64; dimension];
    if embeddings.is_empty() {
        return Ok(mean);
    }

    for emb in embeddings {
        let emb = emb.as_ref();
        if emb.len() != dimension {
            anyhow::bail!(
                "cannot average a {}-dimensional vector into dimension {}",
                emb.len(),
                dimension
            );
        }
        for (acc, &val) in mean.iter_mut().zip(emb) {
            *acc += val;
        }
    }

    let n = embeddings.len() as f64;
    for val in &mut mean {
        *val /= n;
    }

    Ok(mean)
}

/// Document vector for `tokens`: the mean of the embeddings of every token
/// present in `table`, with absent tokens skipped.
///
/// Repeated tokens count once per occurrence. A document with no embedded
/// tokens maps to the zero vector. Fails if the table's dimension is not the
/// configured `dimension`.
pub fn mean_pool(tokens: &[String], table: &EmbeddingTable, dimension: usize) -> Result<Vec<f64>> {
    if table.dimension() != dimension {
        anyhow::bail!(
            "embedding table has dimension {} but dimension {} is configured",
            table.dimension(),
            dimension
        );
    }

    let found: Vec<&[f64]> = tokens.iter().filter_map(|t| table.get(t)).collect();
    mean_embedding(&found, dimension)
}
