//! Pairwise similarity matrices over document collections.
//!
//! Every ordered pair of documents is scored with the requested metrics
//! (cosine, Euclidean, Jaccard, Levenshtein, Hamming, overlap, and winnowing),
//! producing one square matrix per metric.
#![deny(missing_docs)]

pub mod config;
pub mod errors;
pub mod matrix;
pub mod metrics;
pub mod tfidf;
pub mod tokenizer;
pub mod vectorizer;
pub mod winnowing;

pub(crate) mod shingling;

pub use config::EngineConfig;
pub use matrix::{Document, MatrixGenerator, SimilarityMatrices, SimilarityMatrix};
pub use metrics::Metric;
