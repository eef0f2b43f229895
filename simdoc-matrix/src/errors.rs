//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = SimdocMatrixError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimdocMatrixError {
    /// A tokenizer, vectorizer, or metric name was not recognized.
    #[error("UnknownStrategy: unknown {kind} name {name:?}")]
    UnknownStrategy {
        /// What was being selected, e.g. `"tokenizer"`.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// Two vectors of different lengths were given to a vector metric.
    #[error("DimensionMismatch: vectors have {left} and {right} dimensions")]
    DimensionMismatch {
        /// Length of the left-side vector.
        left: usize,
        /// Length of the right-side vector.
        right: usize,
    },

    /// Two strings of different lengths were given to the Hamming distance.
    #[error("LengthMismatch: strings have {left} and {right} characters")]
    LengthMismatch {
        /// Length of the left-side string.
        left: usize,
        /// Length of the right-side string.
        right: usize,
    },

    /// An input argument is invalid.
    #[error("InputError: {0}")]
    Input(String),

    /// Matrix generation was stopped through its cancellation flag.
    #[error("Cancelled: matrix generation was interrupted")]
    Cancelled,
}

impl SimdocMatrixError {
    pub(crate) fn unknown(kind: &'static str, name: &str) -> Self {
        Self::UnknownStrategy {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Input(msg.into())
    }
}
