//! Tokenization of raw text and stopword filtering.
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hashbrown::HashSet;
use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimdocMatrixError};
use crate::shingling::ShingleIter;

/// Strategies of splitting a text into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TokenizeStrategy {
    /// Lower-cased words split on non-word characters, each stemmed.
    Word,
    /// One token per character.
    Character,
    /// Overlapping two-character windows inside words.
    Bigram,
    /// Overlapping three-character windows inside words.
    Trigram,
}

impl TokenizeStrategy {
    /// Gets the name used in configurations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Character => "character",
            Self::Bigram => "bigram",
            Self::Trigram => "trigram",
        }
    }
}

impl FromStr for TokenizeStrategy {
    type Err = SimdocMatrixError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "word" => Ok(Self::Word),
            "character" | "char" => Ok(Self::Character),
            "bigram" => Ok(Self::Bigram),
            "trigram" => Ok(Self::Trigram),
            _ => Err(SimdocMatrixError::unknown("tokenizer", s)),
        }
    }
}

impl TryFrom<String> for TokenizeStrategy {
    type Error = SimdocMatrixError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TokenizeStrategy> for String {
    fn from(s: TokenizeStrategy) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for TokenizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduces a word to its stem.
///
/// Implementations are shared between worker threads.
pub trait Stemmer: Send + Sync {
    /// Returns the stem of a lower-cased word.
    fn stem(&self, word: &str) -> String;
}

/// Snowball stemmer for English words.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Creates the English (Porter2) stemmer.
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Stemmer leaving words untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStemmer;

impl Stemmer for NoopStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Splits texts into token sequences.
#[derive(Clone)]
pub struct Tokenizer {
    strategy: TokenizeStrategy,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Creates a tokenizer stemming words with [`SnowballStemmer::english`].
    pub fn new(strategy: TokenizeStrategy) -> Self {
        Self {
            strategy,
            stemmer: Arc::new(SnowballStemmer::english()),
        }
    }

    /// Replaces the stemmer applied in [`TokenizeStrategy::Word`].
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Gets the strategy.
    pub const fn strategy(&self) -> TokenizeStrategy {
        self.strategy
    }

    /// Splits a text into tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdoc_matrix::tokenizer::{TokenizeStrategy, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::new(TokenizeStrategy::Bigram);
    /// assert_eq!(tokenizer.tokenize("Hi, Bob"), vec!["hi", "bo", "ob"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self.strategy {
            TokenizeStrategy::Word => {
                let text = text.to_lowercase();
                word_runs(&text).map(|w| self.stemmer.stem(w)).collect()
            }
            TokenizeStrategy::Character => text.chars().map(String::from).collect(),
            TokenizeStrategy::Bigram => char_ngrams(text, 2),
            TokenizeStrategy::Trigram => char_ngrams(text, 3),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
}

fn char_ngrams(text: &str, n: usize) -> Vec<String> {
    let text = text.to_lowercase();
    word_runs(&text)
        .flat_map(|run| ShingleIter::new(run, n))
        .map(str::to_string)
        .collect()
}

/// Fixed set of words filtered out of token sequences.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates a set from arbitrary words, compared case-insensitively.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Creates the English stopword set.
    pub fn english() -> Self {
        let words: Vec<String> = stop_words::get(stop_words::LANGUAGE::English);
        Self::new(words)
    }

    /// Checks if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token.to_lowercase().as_str())
    }

    /// Gets the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Removes stopwords from a token sequence, keeping the order of the rest.
    pub fn remove_stopwords(&self, mut tokens: Vec<String>) -> Vec<String> {
        if !self.is_empty() {
            tokens.retain(|t| !self.contains(t));
        }
        tokens
    }
}
