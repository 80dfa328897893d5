// EmbeddingTable: term -> fixed-dimension dense vector.

use std::collections::HashMap;

use anyhow::{Context, Result};

/// `count dim` when `line` is two non-negative integers.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let count = fields.next()?.parse().ok()?;
    let dim = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some((count, dim))
}

/// Mapping from term to a dense vector. Every row has `dimension` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    dimension: usize,
    vectors: HashMap<String, Vec<f64>>,
}

impl EmbeddingTable {
    /// Empty table of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
        }
    }

    /// Build a table from explicit rows. Fails on a row of the wrong length.
    pub fn from_rows<I, S>(dimension: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut table = Self::new(dimension);
        for (term, vector) in rows {
            table.insert(term, vector)?;
        }
        Ok(table)
    }

    /// Parse the word2vec / GloVe text format.
    ///
    /// Each line is `term v1 v2 ... vd`. Blank lines are skipped. An optional
    /// first line `count dim` is accepted as a header only when the next row
    /// has exactly `dim` values (or, with no rows following, when `count` is
    /// 0), so a 1-dimensional row such as `1 2` stays a row. The dimension
    /// comes from the header, or else from the first row.
    pub fn from_text(text: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();

        let mut dimension = None;
        let mut start = 0;
        if let Some((count, dim)) = rows.first().and_then(|&(_, line)| parse_header(line)) {
            let is_header = match rows.get(1) {
                Some(&(_, next)) => next.split_whitespace().count() == dim.saturating_add(1),
                None => count == 0,
            };
            if is_header {
                dimension = Some(dim);
                start = 1;
            }
        }

        let mut table: Option<Self> = dimension.map(Self::new);
        for &(lineno, line) in &rows[start..] {
            let mut fields = line.split_whitespace();
            let Some(term) = fields.next() else {
                continue;
            };
            let vector = fields
                .map(str::parse::<f64>)
                .collect::<std::result::Result<Vec<f64>, _>>()
                .with_context(|| format!("invalid number on embedding line {}", lineno + 1))?;

            let table = table.get_or_insert_with(|| Self::new(vector.len()));
            table
                .insert(term, vector)
                .with_context(|| format!("bad embedding row on line {}", lineno + 1))?;
        }

        table.context("embedding text has no rows and no header")
    }

    /// Insert or replace one row.
    pub fn insert(&mut self, term: impl Into<String>, vector: Vec<f64>) -> Result<()> {
        let term = term.into();
        if vector.len() != self.dimension {
            anyhow::bail!(
                "embedding for '{}' has dimension {} but the table dimension is {}",
                term,
                vector.len(),
                self.dimension
            );
        }
        self.vectors.insert(term, vector);
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, term: &str) -> Option<&[f64]> {
        self.vectors.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vectors.contains_key(term)
    }

    /// Number of terms with an embedding.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Terms with an embedding, sorted.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.vectors.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_wrong_dimension() {
        let ok = EmbeddingTable::from_rows(2, [("a", vec![1.0, 2.0])]);
        assert!(ok.is_ok());
        let bad = EmbeddingTable::from_rows(2, [("a", vec![1.0, 2.0, 3.0])]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_from_text_with_header() {
        let text = "2 3\ngalaxy 0.1 0.2 0.3\nnebula -1 0 1\n";
        let table = EmbeddingTable::from_text(text).unwrap();
        assert_eq!(table.dimension(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("nebula"), Some(&[-1.0, 0.0, 1.0][..]));
    }

    #[test]
    fn test_from_text_without_header() {
        let text = "\ngalaxy 0.5 0.5\n\nstar 1 0\n";
        let table = EmbeddingTable::from_text(text).unwrap();
        assert_eq!(table.dimension(), 2);
        assert_eq!(table.terms(), vec!["galaxy", "star"]);
    }

    #[test]
    fn test_from_text_integer_rows_are_not_a_header() {
        let table = EmbeddingTable::from_text("1 2\n3 4\n").unwrap();
        assert_eq!(table.dimension(), 1);
        assert_eq!(table.get("1"), Some(&[2.0][..]));
        assert_eq!(table.get("3"), Some(&[4.0][..]));

        let single = EmbeddingTable::from_text("1 2\n").unwrap();
        assert_eq!(single.dimension(), 1);
        assert_eq!(single.get("1"), Some(&[2.0][..]));

        let headed = EmbeddingTable::from_text("1 1\n7 0.5\n").unwrap();
        assert_eq!(headed.len(), 1);
        assert_eq!(headed.get("7"), Some(&[0.5][..]));
    }

    #[test]
    fn test_from_text_ragged_rows_fail() {
        let text = "galaxy 0.5 0.5\nstar 1 0 0\n";
        assert!(EmbeddingTable::from_text(text).is_err());
    }

    #[test]
    fn test_from_text_bad_number_fails() {
        assert!(EmbeddingTable::from_text("galaxy 0.5 abc\n").is_err());
    }

    #[test]
    fn test_from_text_empty_fails() {
        assert!(EmbeddingTable::from_text("").is_err());
        let header_only = EmbeddingTable::from_text("0 50\n").unwrap();
        assert_eq!(header_only.dimension(), 50);
        assert!(header_only.is_empty());
    }
}
