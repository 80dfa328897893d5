// LabelClassifier: encode -> fit -> predict -> decode.

use anyhow::Result;
use tracing::info;

use super::encoder::LabelEncoder;
use super::traits::LinearClassifier;

/// A classifier trained once on labelled document vectors and then used for
/// inference only.
pub struct LabelClassifier<C: LinearClassifier> {
    classifier: C,
    encoder: LabelEncoder,
    model: C::Model,
}

impl<C: LinearClassifier> LabelClassifier<C> {
    /// Fit `classifier` on `vectors` paired 1:1 with `labels`.
    pub fn train<S: AsRef<str>>(
        classifier: C,
        vectors: &[Vec<f64>],
        labels: &[S],
    ) -> Result<Self> {
        if vectors.len() != labels.len() {
            anyhow::bail!(
                "{} document vectors but {} labels",
                vectors.len(),
                labels.len()
            );
        }
        if vectors.is_empty() {
            anyhow::bail!("cannot train a classifier on zero documents");
        }

        let encoder = LabelEncoder::fit(labels);
        let indices = encoder.transform(labels)?;
        let model = classifier.fit(vectors, &indices)?;

        info!(
            documents = vectors.len(),
            classes = encoder.num_classes(),
            "Trained label classifier"
        );

        Ok(Self {
            classifier,
            encoder,
            model,
        })
    }

    /// Predict a label for every vector. Every returned label belongs to the
    /// training label set.
    pub fn predict(&self, vectors: &[Vec<f64>]) -> Result<Vec<String>> {
        let indices = self.classifier.predict(&self.model, vectors)?;
        self.encoder.inverse_transform(&indices)
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    pub fn model(&self) -> &C::Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Predicts whichever training index was paired with the nearest vector
    /// by exact equality; anything unseen maps to index 0.
    struct Memorizer;

    impl LinearClassifier for Memorizer {
        type Model = Vec<(Vec<f64>, usize)>;

        fn fit(&self, vectors: &[Vec<f64>], labels: &[usize]) -> Result<Self::Model> {
            Ok(vectors.iter().cloned().zip(labels.iter().copied()).collect())
        }

        fn predict(&self, model: &Self::Model, vectors: &[Vec<f64>]) -> Result<Vec<usize>> {
            Ok(vectors
                .iter()
                .map(|v| {
                    model
                        .iter()
                        .find(|(seen, _)| seen == v)
                        .map(|(_, i)| *i)
                        .unwrap_or(0)
                })
                .collect())
        }
    }

    /// Returns an index no encoder can decode.
    struct Broken;

    impl LinearClassifier for Broken {
        type Model = ();

        fn fit(&self, _vectors: &[Vec<f64>], _labels: &[usize]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, _model: &(), vectors: &[Vec<f64>]) -> Result<Vec<usize>> {
            Ok(vec![usize::MAX; vectors.len()])
        }
    }

    #[test]
    fn test_round_trip_through_adapter() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
        let labels = ["Nebula", "Galaxy", "Logistic regression"];
        let clf = LabelClassifier::train(Memorizer, &vectors, &labels).unwrap();
        assert_eq!(clf.predict(&vectors).unwrap(), labels);
        // The model stores encoded indices, not strings
        assert_eq!(clf.model()[0].1, 2);
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let vectors = vec![vec![1.0]];
        assert!(LabelClassifier::train(Memorizer, &vectors, &["a", "b"]).is_err());
    }

    #[test]
    fn test_empty_training_set_fails() {
        let labels: [&str; 0] = [];
        assert!(LabelClassifier::train(Memorizer, &[], &labels).is_err());
    }

    #[test]
    fn test_out_of_set_prediction_is_rejected() {
        let vectors = vec![vec![1.0]];
        let clf = LabelClassifier::train(Broken, &vectors, &["a"]).unwrap();
        assert!(clf.predict(&vectors).is_err());
    }
}
