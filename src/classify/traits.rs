// Linear classifier trait: the swap-ready fitting abstraction.

use anyhow::Result;

/// A classifier over dense vectors with integer class indices.
///
/// Class indices are dense: `0..num_classes`, where `num_classes` is one more
/// than the largest index seen by `fit`. `predict` must only return indices
/// in that range.
pub trait LinearClassifier: Send + Sync {
    /// Trained parameters.
    type Model;

    /// Fit a model. `vectors` and `labels` are paired by position.
    fn fit(&self, vectors: &[Vec<f64>], labels: &[usize]) -> Result<Self::Model>;

    /// Predict a class index for every vector.
    fn predict(&self, model: &Self::Model, vectors: &[Vec<f64>]) -> Result<Vec<usize>>;
}
