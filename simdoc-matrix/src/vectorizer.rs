//! Vectorization of token sequences over a vocabulary shared by a document pair.
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimdocMatrixError};
use crate::tfidf::{CorpusStatistics, Idf, Tf};

/// Schemes of converting token sequences into vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VectorizeScheme {
    /// Occurrence counts of each vocabulary term.
    BagOfWords,
    /// Presence (1) or absence (0) of each vocabulary term.
    OneHot,
    /// Term frequency multiplied by inverse document frequency.
    TfIdf,
}

impl VectorizeScheme {
    /// Gets the name used in configurations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BagOfWords => "bow",
            Self::OneHot => "one_hot",
            Self::TfIdf => "tfidf",
        }
    }
}

impl FromStr for VectorizeScheme {
    type Err = SimdocMatrixError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bow" | "bag-of-words" | "bag_of_words" => Ok(Self::BagOfWords),
            "one_hot" | "one-hot" => Ok(Self::OneHot),
            "tfidf" | "tf-idf" => Ok(Self::TfIdf),
            _ => Err(SimdocMatrixError::unknown("vectorizer", s)),
        }
    }
}

impl TryFrom<String> for VectorizeScheme {
    type Error = SimdocMatrixError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<VectorizeScheme> for String {
    fn from(s: VectorizeScheme) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for VectorizeScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct terms of two token sequences in order of first occurrence.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds the vocabulary of a document pair, starting with the terms of `lhs`.
    pub fn from_pair<S>(lhs: &[S], rhs: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for term in lhs.iter().chain(rhs) {
            let term = term.as_ref();
            if !vocab.index.contains_key(term) {
                vocab.index.insert(term.to_string(), vocab.terms.len());
                vocab.terms.push(term.to_string());
            }
        }
        vocab
    }

    /// Gets the position of a term.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Gets the terms in vocabulary order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Gets the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Checks if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Converts token sequences into vectors indexed by a [`Vocabulary`].
#[derive(Clone)]
pub struct Vectorizer {
    scheme: VectorizeScheme,
    tf: Tf,
    statistics: Option<Arc<dyn CorpusStatistics>>,
}

impl fmt::Debug for Vectorizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vectorizer")
            .field("scheme", &self.scheme)
            .field("tf", &self.tf)
            .field("has_statistics", &self.statistics.is_some())
            .finish()
    }
}

impl Vectorizer {
    /// Creates an instance.
    pub const fn new(scheme: VectorizeScheme) -> Self {
        Self {
            scheme,
            tf: Tf::new(),
            statistics: None,
        }
    }

    /// Sets the term frequency weighting of [`VectorizeScheme::TfIdf`].
    pub const fn tf(mut self, tf: Tf) -> Self {
        self.tf = tf;
        self
    }

    /// Sets corpus-wide statistics for [`VectorizeScheme::TfIdf`].
    /// If not set, statistics are counted over each compared pair.
    pub fn statistics(mut self, statistics: Arc<dyn CorpusStatistics>) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Gets the scheme.
    pub const fn scheme(&self) -> VectorizeScheme {
        self.scheme
    }

    /// Converts tokens into a vector of `vocab.len()` dimensions.
    /// Tokens out of the vocabulary are ignored.
    ///
    /// Under [`VectorizeScheme::TfIdf`] without injected statistics,
    /// every IDF weight is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdoc_matrix::vectorizer::{Vectorizer, VectorizeScheme, Vocabulary};
    ///
    /// let lhs = vec!["a", "b", "a"];
    /// let rhs = vec!["c", "a"];
    /// let vocab = Vocabulary::from_pair(&lhs, &rhs);
    /// let vectorizer = Vectorizer::new(VectorizeScheme::BagOfWords);
    /// assert_eq!(vectorizer.vectorize(&lhs, &vocab), vec![2., 1., 0.]);
    /// ```
    pub fn vectorize<S>(&self, tokens: &[S], vocab: &Vocabulary) -> Vec<f64>
    where
        S: AsRef<str>,
    {
        self.vectorize_with(tokens, vocab, self.statistics.as_deref())
    }

    /// Builds the vocabulary of a pair and converts both sides into vectors
    /// of the same dimension.
    pub fn vectorize_pair<S>(&self, lhs: &[S], rhs: &[S]) -> (Vec<f64>, Vec<f64>)
    where
        S: AsRef<str>,
    {
        let vocab = Vocabulary::from_pair(lhs, rhs);
        match (self.scheme, self.statistics.as_deref()) {
            (VectorizeScheme::TfIdf, None) => {
                let mut idf = Idf::new();
                idf.add(lhs);
                idf.add(rhs);
                (
                    self.vectorize_with(lhs, &vocab, Some(&idf)),
                    self.vectorize_with(rhs, &vocab, Some(&idf)),
                )
            }
            (_, statistics) => (
                self.vectorize_with(lhs, &vocab, statistics),
                self.vectorize_with(rhs, &vocab, statistics),
            ),
        }
    }

    fn vectorize_with<S>(
        &self,
        tokens: &[S],
        vocab: &Vocabulary,
        statistics: Option<&dyn CorpusStatistics>,
    ) -> Vec<f64>
    where
        S: AsRef<str>,
    {
        let mut counts = vec![0usize; vocab.len()];
        for token in tokens {
            if let Some(i) = vocab.position(token.as_ref()) {
                counts[i] += 1;
            }
        }
        match self.scheme {
            VectorizeScheme::BagOfWords => counts.into_iter().map(|c| c as f64).collect(),
            VectorizeScheme::OneHot => counts
                .into_iter()
                .map(|c| if c == 0 { 0. } else { 1. })
                .collect(),
            VectorizeScheme::TfIdf => counts
                .into_iter()
                .zip(vocab.terms())
                .map(|(c, term)| {
                    let idf = statistics.map_or(1., |s| s.idf(term));
                    self.tf.tf(c, tokens.len()) * idf
                })
                .collect(),
        }
    }
}
