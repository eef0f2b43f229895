//! Pairwise score matrices over a document collection.
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::errors::{Result, SimdocMatrixError};
use crate::metrics::{self, Metric};
use crate::tfidf::CorpusStatistics;
use crate::tokenizer::{NoopStemmer, SnowballStemmer, Stemmer, StopWords, Tokenizer};
use crate::vectorizer::Vectorizer;
use crate::winnowing::{FingerprintSet, Fingerprinter};

/// Document with an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Identifier, not checked for uniqueness.
    pub id: String,
    /// Raw text.
    pub text: String,
}

impl Document {
    /// Creates an instance.
    pub fn new<I, T>(id: I, text: T) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Square matrix of the scores of one metric, where row and column `i`
/// correspond to the `i`-th document.
///
/// Diagonal cells and cells whose score is undefined hold NaN.
#[derive(Clone, Debug, Serialize)]
pub struct SimilarityMatrix {
    metric: Metric,
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Gets the metric.
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Gets the number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Gets the score of the `i`-th document against the `j`-th one.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Gets the `i`-th row.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Matrices of all the requested metrics, in request order.
#[derive(Clone, Debug, Serialize)]
pub struct SimilarityMatrices {
    ids: Vec<String>,
    matrices: Vec<SimilarityMatrix>,
}

impl SimilarityMatrices {
    /// Gets the document identifiers in row order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Gets the matrix of a metric.
    pub fn get(&self, metric: Metric) -> Option<&SimilarityMatrix> {
        self.matrices.iter().find(|m| m.metric == metric)
    }

    /// Iterates over the matrices.
    pub fn iter(&self) -> impl Iterator<Item = &SimilarityMatrix> {
        self.matrices.iter()
    }

    /// Gets the number of matrices.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Checks if there is no matrix.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

/// Representations of a document that do not depend on its counterpart.
#[derive(Default)]
struct Profile<'a> {
    text: &'a str,
    words: HashSet<&'a str>,
    ngrams: HashSet<Vec<&'a str>>,
    frequencies: HashMap<&'a str, usize>,
    tokens: Vec<String>,
    fingerprints: FingerprintSet,
}

/// Generator of [`SimilarityMatrices`].
///
/// # Examples
///
/// ```
/// use simdoc_matrix::{Document, EngineConfig, MatrixGenerator, Metric};
///
/// let documents = vec![
///     Document::new("a", "I like to read."),
///     Document::new("b", "I love to read."),
/// ];
/// let config = EngineConfig::from_names("word", "bow", &["jaccard", "overlap"]).unwrap();
/// let matrices = MatrixGenerator::new(config).unwrap().generate(&documents).unwrap();
///
/// let jaccard = matrices.get(Metric::Jaccard).unwrap();
/// assert!(jaccard.get(0, 0).is_nan());
/// assert_eq!(jaccard.get(0, 1), 0.6);
/// assert_eq!(matrices.get(Metric::Overlap).unwrap().get(1, 0), 0.75);
/// ```
pub struct MatrixGenerator {
    config: EngineConfig,
    tokenizer: Tokenizer,
    stopwords: StopWords,
    vectorizer: Vectorizer,
    fingerprinter: Fingerprinter,
    shows_progress: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl MatrixGenerator {
    /// Creates an instance.
    ///
    /// # Errors
    ///
    /// [`SimdocMatrixError::Input`] is returned if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let stemmer: Arc<dyn Stemmer> = if config.stemming {
            Arc::new(SnowballStemmer::english())
        } else {
            Arc::new(NoopStemmer)
        };
        let stopwords = if config.remove_stopwords {
            StopWords::english()
        } else {
            StopWords::default()
        };
        Ok(Self {
            tokenizer: Tokenizer::new(config.tokenizer).stemmer(stemmer.clone()),
            stopwords,
            vectorizer: Vectorizer::new(config.vectorizer),
            fingerprinter: Fingerprinter::new(config.k, config.w)?
                .seed(config.seed)
                .stemmer(stemmer),
            config,
            shows_progress: false,
            cancel: None,
        })
    }

    /// Replaces the stemmer of the word tokenizers.
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.tokenizer = self.tokenizer.stemmer(stemmer.clone());
        self.fingerprinter = self.fingerprinter.stemmer(stemmer);
        self
    }

    /// Replaces the stopwords removed before vectorization.
    pub fn stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Sets corpus-wide statistics for TF-IDF vectorization.
    pub fn statistics(mut self, statistics: Arc<dyn CorpusStatistics>) -> Self {
        self.vectorizer = self.vectorizer.statistics(statistics);
        self
    }

    /// Reports the progress via `tracing`?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Sets a flag that stops the generation when raised.
    /// It is checked before each pair.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Gets the configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the matrices of all requested metrics.
    ///
    /// # Errors
    ///
    /// [`SimdocMatrixError::Cancelled`] is returned if the cancellation flag is raised.
    pub fn generate(&self, documents: &[Document]) -> Result<SimilarityMatrices> {
        self.log_start(documents, false);
        let profiles: Vec<_> = documents.iter().map(|d| self.profile(&d.text)).collect();
        let mut rows = Vec::with_capacity(documents.len());
        for i in 0..documents.len() {
            rows.push(self.row(i, &profiles)?);
            if self.shows_progress {
                info!("Processed {}/{} rows", i + 1, documents.len());
            }
        }
        Ok(self.assemble(documents, rows))
    }

    /// Builds the matrices of all requested metrics, one row per rayon task.
    ///
    /// # Errors
    ///
    /// [`SimdocMatrixError::Cancelled`] is returned if the cancellation flag is raised.
    pub fn generate_in_parallel(&self, documents: &[Document]) -> Result<SimilarityMatrices> {
        self.log_start(documents, true);
        let profiles: Vec<_> = documents
            .par_iter()
            .map(|d| self.profile(&d.text))
            .collect();
        let processed = AtomicUsize::new(0);
        let rows = (0..documents.len())
            .into_par_iter()
            .map(|i| -> Result<Vec<Vec<f64>>> {
                let row = self.row(i, &profiles)?;
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if self.shows_progress {
                    info!("Processed {}/{} rows", done, documents.len());
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.assemble(documents, rows))
    }

    fn log_start(&self, documents: &[Document], parallel: bool) {
        let metrics: Vec<_> = self.config.metrics.iter().map(|m| m.as_str()).collect();
        info!(
            documents = documents.len(),
            parallel,
            "Generating matrices of {}",
            metrics.join(",")
        );
    }

    fn profile<'a>(&self, text: &'a str) -> Profile<'a> {
        let requests = |m| self.config.requests(m);
        let mut profile = Profile {
            text,
            ..Profile::default()
        };
        if requests(Metric::Jaccard) || requests(Metric::Overlap) {
            profile.words = text.split_whitespace().collect();
        }
        if requests(Metric::JaccardNgram) {
            let words: Vec<_> = text.split_whitespace().collect();
            profile.ngrams = metrics::word_ngrams(&words, self.config.ngram)
                .map(|g| g.to_vec())
                .collect();
        }
        if requests(Metric::Cosine) {
            profile.frequencies = metrics::term_frequencies(text.split_whitespace());
        }
        if requests(Metric::Euclidean) {
            profile.tokens = self
                .stopwords
                .remove_stopwords(self.tokenizer.tokenize(text));
        }
        if requests(Metric::Winnowing) {
            profile.fingerprints = self.fingerprinter.fingerprint(text);
        }
        profile
    }

    /// Computes the `i`-th row of every matrix.
    fn row(&self, i: usize, profiles: &[Profile]) -> Result<Vec<Vec<f64>>> {
        let n = profiles.len();
        let mut rows = vec![vec![f64::NAN; n]; self.config.metrics.len()];
        for j in 0..n {
            if self.is_cancelled() {
                return Err(SimdocMatrixError::Cancelled);
            }
            if i == j {
                continue;
            }
            for (row, &metric) in rows.iter_mut().zip(&self.config.metrics) {
                row[j] = match self.score(metric, &profiles[i], &profiles[j]) {
                    Ok(Some(score)) => score,
                    Ok(None) => f64::NAN,
                    Err(e @ SimdocMatrixError::LengthMismatch { .. }) => {
                        debug!(i, j, %metric, "Not applicable: {e}");
                        f64::NAN
                    }
                    Err(e) => {
                        warn!(i, j, %metric, "Failed to score: {e}");
                        f64::NAN
                    }
                };
            }
        }
        Ok(rows)
    }

    fn score(&self, metric: Metric, a: &Profile, b: &Profile) -> Result<Option<f64>> {
        let score = match metric {
            Metric::Cosine => Some(metrics::cosine_similarity(&a.frequencies, &b.frequencies)),
            // An empty vocabulary leaves nothing to compare.
            Metric::Euclidean if a.tokens.is_empty() && b.tokens.is_empty() => None,
            Metric::Euclidean => {
                let (x, y) = self.vectorizer.vectorize_pair(&a.tokens, &b.tokens);
                Some(metrics::euclidean_similarity(&x, &y)?)
            }
            Metric::Jaccard => metrics::jaccard_index(&a.words, &b.words),
            Metric::JaccardNgram => metrics::jaccard_index(&a.ngrams, &b.ngrams),
            Metric::Levenshtein => Some(metrics::levenshtein_similarity(a.text, b.text)),
            Metric::Hamming => Some(metrics::hamming_similarity(a.text, b.text)?),
            Metric::Overlap => metrics::overlap_index(&a.words, &b.words),
            Metric::Winnowing => Some(a.fingerprints.similarity(&b.fingerprints)),
        };
        Ok(score)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Transposes rows indexed by `[document][metric]` into matrices.
    fn assemble(&self, documents: &[Document], rows: Vec<Vec<Vec<f64>>>) -> SimilarityMatrices {
        let mut matrices: Vec<_> = self
            .config
            .metrics
            .iter()
            .map(|&metric| SimilarityMatrix {
                metric,
                rows: Vec::with_capacity(documents.len()),
            })
            .collect();
        for doc_rows in rows {
            for (matrix, row) in matrices.iter_mut().zip(doc_rows) {
                matrix.rows.push(row);
            }
        }
        SimilarityMatrices {
            ids: documents.iter().map(|d| d.id.clone()).collect(),
            matrices,
        }
    }
}
