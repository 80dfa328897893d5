// Multinomial logistic regression, fitted by full-batch gradient descent.
//
// This is the default LinearClassifier. It minimizes mean cross-entropy
// plus an L2 penalty on the weights (not the biases), and stops early once
// the largest gradient component drops below `tolerance`.

use anyhow::Result;
use tracing::debug;

use crate::similarity::dot;

use super::traits::LinearClassifier;

#[derive(Debug, Clone)]
pub struct SoftmaxRegression {
    /// Upper bound on gradient steps
    pub max_iter: usize,
    pub learning_rate: f64,
    /// L2 penalty strength on the weights
    pub l2: f64,
    pub tolerance: f64,
}

impl Default for SoftmaxRegression {
    fn default() -> Self {
        Self {
            max_iter: 200,
            learning_rate: 0.5,
            l2: 1e-4,
            tolerance: 1e-6,
        }
    }
}

/// One weight row and one bias per class.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftmaxModel {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

impl SoftmaxModel {
    pub fn num_classes(&self) -> usize {
        self.bias.len()
    }

    pub fn dimension(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Class probabilities for one vector.
    pub fn probabilities(&self, x: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(w, b)| dot(w, x) + b)
            .collect();
        softmax(&scores)
    }
}

/// Numerically stable softmax.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Index of the largest value; the lowest index wins ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Common dimension of `vectors`, or an error if they are ragged.
fn dimension_of(vectors: &[Vec<f64>]) -> Result<usize> {
    let dim = vectors.first().map_or(0, Vec::len);
    if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
        anyhow::bail!(
            "document vectors have inconsistent dimensions ({} and {})",
            dim,
            bad.len()
        );
    }
    Ok(dim)
}

impl LinearClassifier for SoftmaxRegression {
    type Model = SoftmaxModel;

    fn fit(&self, vectors: &[Vec<f64>], labels: &[usize]) -> Result<SoftmaxModel> {
        if vectors.len() != labels.len() {
            anyhow::bail!("{} vectors but {} labels", vectors.len(), labels.len());
        }
        let Some(&max_label) = labels.iter().max() else {
            anyhow::bail!("cannot fit a classifier on zero samples");
        };

        let dim = dimension_of(vectors)?;
        let classes = max_label + 1;
        let n = vectors.len() as f64;

        let mut model = SoftmaxModel {
            weights: vec![vec![0.0; dim]; classes],
            bias: vec![0.0; classes],
        };

        for iteration in 0..self.max_iter {
            let mut grad_w = vec![vec![0.0; dim]; classes];
            let mut grad_b = vec![0.0; classes];

            for (x, &y) in vectors.iter().zip(labels) {
                let probs = model.probabilities(x);
                for k in 0..classes {
                    let err = probs[k] - if k == y { 1.0 } else { 0.0 };
                    grad_b[k] += err / n;
                    for (g, xi) in grad_w[k].iter_mut().zip(x) {
                        *g += err * xi / n;
                    }
                }
            }

            let mut largest = 0.0_f64;
            for k in 0..classes {
                for (g, w) in grad_w[k].iter_mut().zip(&model.weights[k]) {
                    *g += self.l2 * w;
                    largest = largest.max(g.abs());
                }
                largest = largest.max(grad_b[k].abs());
            }

            for k in 0..classes {
                for (w, g) in model.weights[k].iter_mut().zip(&grad_w[k]) {
                    *w -= self.learning_rate * g;
                }
                model.bias[k] -= self.learning_rate * grad_b[k];
            }

            if largest < self.tolerance {
                debug!(iteration, "Softmax regression converged");
                break;
            }
        }

        Ok(model)
    }

    fn predict(&self, model: &SoftmaxModel, vectors: &[Vec<f64>]) -> Result<Vec<usize>> {
        vectors
            .iter()
            .map(|x| {
                if x.len() != model.dimension() {
                    anyhow::bail!(
                        "model expects dimension {} but got a {}-dimensional vector",
                        model.dimension(),
                        x.len()
                    );
                }
                Ok(argmax(&model.probabilities(x)))
            })
            .collect()
    }
}
