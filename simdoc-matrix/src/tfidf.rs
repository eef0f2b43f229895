//! Term weighting for the TF-IDF vectorization scheme.
use hashbrown::{HashMap, HashSet};

/// Corpus-wide statistics consulted by TF-IDF vectorization.
///
/// Implementations are shared between worker threads.
pub trait CorpusStatistics: Send + Sync {
    /// Gets the inverse document frequency of a term.
    fn idf(&self, term: &str) -> f64;
}

/// Inverse document frequencies counted over a set of tokenized documents.
#[derive(Clone, Debug, Default)]
pub struct Idf {
    counter: HashMap<String, usize>,
    num_docs: usize,
    smooth: bool,
}

impl Idf {
    /// Creates an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables to smooth the IDF weights as if an extra document contained every term.
    pub const fn smooth(mut self, yes: bool) -> Self {
        self.smooth = yes;
        self
    }

    /// Counts the terms of a document.
    pub fn add<S>(&mut self, terms: &[S])
    where
        S: AsRef<str>,
    {
        let mut dedup = HashSet::new();
        for term in terms {
            let term = term.as_ref();
            if dedup.insert(term) {
                self.counter
                    .entry(term.to_string())
                    .and_modify(|c| *c += 1)
                    .or_insert(1);
            }
        }
        self.num_docs += 1;
    }

    /// Gets the number of counted documents.
    pub const fn num_docs(&self) -> usize {
        self.num_docs
    }
}

impl CorpusStatistics for Idf {
    /// Standard weights are `log10(n/m)+1`, where `n` is the number of documents
    /// and `m` is the number of documents containing the term. Terms never counted
    /// weigh 0, unless the weights are smoothed to `log10((n+1)/(m+1))+1`.
    fn idf(&self, term: &str) -> f64 {
        let m = self.counter.get(term).copied().unwrap_or(0);
        if self.smooth {
            let n = (self.num_docs + 1) as f64;
            (n / (m + 1) as f64).log10() + 1.
        } else if m == 0 {
            0.
        } else {
            let n = self.num_docs as f64;
            (n / m as f64).log10() + 1.
        }
    }
}

/// Term frequency weighting.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tf {
    sublinear: bool,
}

impl Tf {
    /// Creates an instance of the standard term frequency.
    pub const fn new() -> Self {
        Self { sublinear: false }
    }

    /// Enables the logarithmically scaled frequency `log10(count)+1`.
    pub const fn sublinear(mut self, yes: bool) -> Self {
        self.sublinear = yes;
        self
    }

    /// Weighs a term occurring `count` times in a document of `total` tokens.
    pub fn tf(&self, count: usize, total: usize) -> f64 {
        if count == 0 {
            0.
        } else if self.sublinear {
            (count as f64).log10() + 1.
        } else {
            count as f64 / total as f64
        }
    }
}
