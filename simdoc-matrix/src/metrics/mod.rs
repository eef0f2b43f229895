//! Similarity and distance functions between two documents.
pub mod edit;
pub mod set;
pub mod vector;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimdocMatrixError};

pub use edit::{
    hamming_distance, hamming_similarity, levenshtein_distance, levenshtein_similarity,
    normalized_hamming_distance, normalized_levenshtein_distance,
};
pub use set::{jaccard_index, jaccard_similarity, overlap_coefficient, overlap_index, word_ngrams};
pub use vector::{cosine_similarity, euclidean_distance, euclidean_similarity, term_frequencies};

/// Metrics that can be requested from [`MatrixGenerator`](crate::MatrixGenerator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    /// Cosine similarity of term frequencies over the terms common to both texts.
    Cosine,
    /// `1/(1+d)`, where `d` is the Euclidean distance of the vectorized texts.
    Euclidean,
    /// Jaccard similarity of whitespace-separated words.
    Jaccard,
    /// Jaccard similarity of word n-grams.
    JaccardNgram,
    /// One minus the normalized Levenshtein distance of characters.
    Levenshtein,
    /// One minus the normalized Hamming distance of characters.
    Hamming,
    /// Overlap coefficient of whitespace-separated words.
    Overlap,
    /// Winnowing fingerprint similarity.
    Winnowing,
}

impl Metric {
    /// All the metrics.
    pub const ALL: [Self; 8] = [
        Self::Cosine,
        Self::Euclidean,
        Self::Jaccard,
        Self::JaccardNgram,
        Self::Levenshtein,
        Self::Hamming,
        Self::Overlap,
        Self::Winnowing,
    ];

    /// Gets the name used in configurations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
            Self::Jaccard => "jaccard",
            Self::JaccardNgram => "jaccard_ngram",
            Self::Levenshtein => "levenshtein",
            Self::Hamming => "hamming",
            Self::Overlap => "overlap",
            Self::Winnowing => "winnowing",
        }
    }

    /// Gets the label of output matrices, such as `cosine_similarity`.
    pub fn label(&self) -> String {
        format!("{}_similarity", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = SimdocMatrixError;
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_suffix("_similarity").unwrap_or(s);
        match name {
            "cosine" => Ok(Self::Cosine),
            "euclidean" => Ok(Self::Euclidean),
            "jaccard" => Ok(Self::Jaccard),
            "jaccard_ngram" | "jaccard_bigram" => Ok(Self::JaccardNgram),
            "levenshtein" => Ok(Self::Levenshtein),
            "hamming" => Ok(Self::Hamming),
            "overlap" => Ok(Self::Overlap),
            "winnowing" => Ok(Self::Winnowing),
            _ => Err(SimdocMatrixError::unknown("metric", s)),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = SimdocMatrixError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Metric> for String {
    fn from(m: Metric) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
            assert_eq!(metric.label().parse::<Metric>(), Ok(metric));
        }
        assert_eq!("jaccard_bigram".parse::<Metric>(), Ok(Metric::JaccardNgram));
    }

    #[test]
    fn test_unknown_metric() {
        assert_eq!(
            "dice".parse::<Metric>(),
            Err(SimdocMatrixError::unknown("metric", "dice"))
        );
    }
}
