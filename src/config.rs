use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::classify::SoftmaxRegression;
use crate::embeddings::RandomIndexing;
use crate::source::FileDocumentSource;
use crate::weighting::Normalization;

/// Central configuration loaded from environment variables.
///
/// Every setting has a default. The .env file is loaded at startup via
/// dotenvy, so values there behave like real environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the filesystem document source (DOCVEC_CORPUS_DIR)
    pub corpus_dir: PathBuf,
    /// Language subdirectory the document source reads from (DOCVEC_LANGUAGE)
    pub language: String,
    /// Embedding dimension (DOCVEC_VECTOR_SIZE)
    pub vector_size: usize,
    /// Embedding context window (DOCVEC_WINDOW)
    pub window: usize,
    /// Minimum term frequency to receive an embedding (DOCVEC_MIN_COUNT)
    pub min_count: usize,
    /// Embedding seed (DOCVEC_SEED)
    pub seed: u64,
    /// Classifier iteration cap (DOCVEC_MAX_ITER)
    pub max_iter: usize,
    /// Normalization before comparison (DOCVEC_NORMALIZE: none | l2)
    pub normalization: Normalization,
    /// Top terms shown per document (DOCVEC_TOP_TERMS)
    pub top_terms: usize,
    /// Documents fetched concurrently (DOCVEC_CONCURRENCY)
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("./corpus"),
            language: "en".to_string(),
            vector_size: 100,
            window: 5,
            min_count: 2,
            seed: 42,
            max_iter: 200,
            normalization: Normalization::None,
            top_terms: 5,
            concurrency: 4,
        }
    }
}

/// Read `key` through `lookup` and parse it, falling back to `default` when
/// unset or blank. A value that is set but unparseable is an error.
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {key}: '{raw}'")),
        _ => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value lookup. `load()` uses the
    /// process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            corpus_dir: lookup("DOCVEC_CORPUS_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_dir),
            language: lookup("DOCVEC_LANGUAGE")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.language),
            vector_size: parse_var(&lookup, "DOCVEC_VECTOR_SIZE", defaults.vector_size)?,
            window: parse_var(&lookup, "DOCVEC_WINDOW", defaults.window)?,
            min_count: parse_var(&lookup, "DOCVEC_MIN_COUNT", defaults.min_count)?,
            seed: parse_var(&lookup, "DOCVEC_SEED", defaults.seed)?,
            max_iter: parse_var(&lookup, "DOCVEC_MAX_ITER", defaults.max_iter)?,
            normalization: parse_var(&lookup, "DOCVEC_NORMALIZE", defaults.normalization)?,
            top_terms: parse_var(&lookup, "DOCVEC_TOP_TERMS", defaults.top_terms)?,
            concurrency: parse_var(&lookup, "DOCVEC_CONCURRENCY", defaults.concurrency)?,
        };

        if config.vector_size == 0 {
            anyhow::bail!("DOCVEC_VECTOR_SIZE must be at least 1");
        }

        Ok(config)
    }

    /// Document source rooted at the configured corpus directory and language.
    pub fn document_source(&self) -> FileDocumentSource {
        FileDocumentSource::new(self.corpus_dir.clone(), self.language.clone())
    }

    /// Embedding trainer with the configured window, min count and seed.
    pub fn embedding_trainer(&self) -> RandomIndexing {
        RandomIndexing {
            window: self.window,
            min_count: self.min_count,
            seed: self.seed,
        }
    }

    /// Classifier with the configured iteration cap.
    pub fn classifier(&self) -> SoftmaxRegression {
        SoftmaxRegression {
            max_iter: self.max_iter,
            ..SoftmaxRegression::default()
        }
    }
}
