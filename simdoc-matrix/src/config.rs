//! Selection of the tokenizer, vectorizer, and metrics applied to each pair.
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimdocMatrixError};
use crate::metrics::Metric;
use crate::tokenizer::TokenizeStrategy;
use crate::vectorizer::VectorizeScheme;
use crate::winnowing::{DEFAULT_K, DEFAULT_SEED, DEFAULT_W};

/// Configuration of [`MatrixGenerator`](crate::MatrixGenerator).
///
/// Unknown strategy or metric names are rejected while deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Tokenizer of the texts vectorized for the Euclidean similarity.
    pub tokenizer: TokenizeStrategy,
    /// Vectorizer for the Euclidean similarity.
    pub vectorizer: VectorizeScheme,
    /// Metrics to compute, one matrix each, in output order.
    pub metrics: Vec<Metric>,
    /// Removes English stopwords before vectorization.
    pub remove_stopwords: bool,
    /// Stems words in the word tokenizer.
    pub stemming: bool,
    /// Number of words in an n-gram of [`Metric::JaccardNgram`].
    pub ngram: usize,
    /// Number of tokens in a winnowing k-gram.
    pub k: usize,
    /// Number of k-grams in a winnowing window.
    pub w: usize,
    /// Seed of the winnowing token hash.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizeStrategy::Word,
            vectorizer: VectorizeScheme::BagOfWords,
            metrics: Metric::ALL.to_vec(),
            remove_stopwords: true,
            stemming: true,
            ngram: 2,
            k: DEFAULT_K,
            w: DEFAULT_W,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration from names, failing on the first unknown one.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdoc_matrix::{EngineConfig, Metric};
    ///
    /// let config = EngineConfig::from_names("word", "one_hot", &["jaccard", "winnowing"]).unwrap();
    /// assert_eq!(config.metrics, vec![Metric::Jaccard, Metric::Winnowing]);
    ///
    /// assert!(EngineConfig::from_names("word", "bow", &["dice"]).is_err());
    /// ```
    pub fn from_names<S>(tokenizer: &str, vectorizer: &str, metrics: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let config = Self {
            tokenizer: tokenizer.parse()?,
            vectorizer: vectorizer.parse()?,
            metrics: parse_metrics(metrics)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.metrics.is_empty() {
            return Err(SimdocMatrixError::input("At least one metric must be given."));
        }
        if self.ngram == 0 {
            return Err(SimdocMatrixError::input("n-gram size must not be 0."));
        }
        if self.k == 0 {
            return Err(SimdocMatrixError::input("k-gram size must not be 0."));
        }
        if self.w == 0 {
            return Err(SimdocMatrixError::input("Window size must not be 0."));
        }
        Ok(())
    }

    /// Checks if a metric is requested.
    pub fn requests(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}

/// Parses metric names, dropping repeated ones.
pub fn parse_metrics<S>(names: &[S]) -> Result<Vec<Metric>>
where
    S: AsRef<str>,
{
    let mut metrics = Vec::with_capacity(names.len());
    for name in names {
        let metric: Metric = name.as_ref().trim().parse()?;
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
    }
    Ok(metrics)
}
