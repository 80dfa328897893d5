// LabelEncoder: string labels <-> dense integer indices.

use std::collections::BTreeSet;

use anyhow::Result;

/// Stable bijection between the distinct labels seen at fit time (sorted)
/// and `0..num_classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learn the label set. Duplicates collapse; order is lexicographic.
    pub fn fit<S: AsRef<str>>(labels: &[S]) -> Self {
        let classes: BTreeSet<&str> = labels.iter().map(AsRef::as_ref).collect();
        Self {
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Index of every label. Fails on a label not seen at fit time.
    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.classes
                    .binary_search_by(|c| c.as_str().cmp(label))
                    .map_err(|_| anyhow::anyhow!("unknown label '{label}'"))
            })
            .collect()
    }

    /// Label of every index. Fails on an index outside the label set.
    pub fn inverse_transform(&self, indices: &[usize]) -> Result<Vec<String>> {
        indices
            .iter()
            .map(|&i| match self.classes.get(i) {
                Some(label) => Ok(label.clone()),
                None => anyhow::bail!(
                    "class index {i} is outside the label set ({} classes)",
                    self.classes.len()
                ),
            })
            .collect()
    }
}
