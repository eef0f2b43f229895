//! Document fingerprinting with winnowing.
//!
//! Tokens are hashed, grouped into overlapping k-grams of hashes, and from each
//! window of `w` consecutive k-grams the one with the minimum leading hash is kept.
//! Two documents are compared through their sets of kept k-grams.
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use fasthash::{CityHasher, FastHasher};
use hashbrown::HashSet;

use crate::errors::{Result, SimdocMatrixError};
use crate::tokenizer::{Stemmer, TokenizeStrategy, Tokenizer};

/// Default k-gram size.
pub const DEFAULT_K: usize = 3;
/// Default window size.
pub const DEFAULT_W: usize = 4;
/// Default seed of the token hash.
pub const DEFAULT_SEED: u64 = 53;

/// Set of k-grams selected from a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FingerprintSet {
    kgrams: HashSet<Box<[u64]>>,
}

impl FingerprintSet {
    /// Gets the number of fingerprints.
    pub fn len(&self) -> usize {
        self.kgrams.len()
    }

    /// Checks if no fingerprint was selected.
    pub fn is_empty(&self) -> bool {
        self.kgrams.is_empty()
    }

    /// Checks if a k-gram was selected.
    pub fn contains(&self, kgram: &[u64]) -> bool {
        self.kgrams.contains(kgram)
    }

    /// Computes the number of shared fingerprints divided by the size of the
    /// smaller set. Returns 0 if either set is empty.
    pub fn similarity(&self, other: &Self) -> f64 {
        let smaller = self.len().min(other.len());
        if smaller == 0 {
            return 0.;
        }
        self.kgrams.intersection(&other.kgrams).count() as f64 / smaller as f64
    }
}

/// Builds [`FingerprintSet`]s from texts.
#[derive(Clone, Debug)]
pub struct Fingerprinter {
    k: usize,
    w: usize,
    seed: u64,
    tokenizer: Tokenizer,
}

impl Fingerprinter {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `k` - Number of tokens in a k-gram (must be more than 0).
    /// * `w` - Number of k-grams in a window (must be more than 0).
    pub fn new(k: usize, w: usize) -> Result<Self> {
        if k == 0 {
            return Err(SimdocMatrixError::input("k-gram size must not be 0."));
        }
        if w == 0 {
            return Err(SimdocMatrixError::input("Window size must not be 0."));
        }
        Ok(Self {
            k,
            w,
            seed: DEFAULT_SEED,
            tokenizer: Tokenizer::new(TokenizeStrategy::Word),
        })
    }

    /// Sets the seed of the token hash.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the stemmer of the word tokenizer.
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.tokenizer = self.tokenizer.stemmer(stemmer);
        self
    }

    /// Hashes a token.
    pub fn hash_token(&self, token: &str) -> u64 {
        let mut s = CityHasher::with_seed(self.seed);
        token.hash(&mut s);
        s.finish()
    }

    /// Selects the fingerprints of a text split into words.
    ///
    /// Texts with fewer than `k+w-1` words have no fingerprint.
    pub fn fingerprint(&self, text: &str) -> FingerprintSet {
        let hashes: Vec<u64> = self
            .tokenizer
            .tokenize(text)
            .iter()
            .map(|t| self.hash_token(t))
            .collect();
        winnow(&hashes, self.k, self.w)
    }

    /// Computes the winnowing similarity of two texts.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdoc_matrix::winnowing::Fingerprinter;
    ///
    /// let fp = Fingerprinter::new(3, 4).unwrap();
    /// let text = "the quick brown fox jumps over the lazy dog";
    /// assert_eq!(fp.similarity(text, text), 1.);
    /// assert_eq!(fp.similarity(text, "too short"), 0.);
    /// ```
    pub fn similarity(&self, lhs: &str, rhs: &str) -> f64 {
        self.fingerprint(lhs).similarity(&self.fingerprint(rhs))
    }
}

/// Keeps, from every window of `w` consecutive k-grams, the k-gram with the
/// minimum leading hash; the first one in the window on ties.
fn winnow(hashes: &[u64], k: usize, w: usize) -> FingerprintSet {
    let kgrams: Vec<&[u64]> = hashes.windows(k).collect();
    let mut fingerprints = FingerprintSet::default();
    for window in kgrams.windows(w) {
        let mut selected = window[0];
        for &kgram in &window[1..] {
            if kgram[0] < selected[0] {
                selected = kgram;
            }
        }
        fingerprints.kgrams.insert(selected.into());
    }
    fingerprints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winnow_first_minimum() {
        // k-grams: [5,1] [1,7] [7,1] [1,9]
        let fingerprints = winnow(&[5, 1, 7, 1, 9], 2, 3);
        assert_eq!(fingerprints.len(), 1);
        assert!(fingerprints.contains(&[1, 7]));
        assert!(!fingerprints.contains(&[1, 9]));
    }

    #[test]
    fn test_winnow_dedup() {
        let fingerprints = winnow(&[4, 3, 2, 1, 8, 9, 6], 1, 2);
        // windows: (4,3) (3,2) (2,1) (1,8) (8,9) (9,6)
        let expected: Vec<u64> = vec![3, 2, 1, 8, 6];
        assert_eq!(fingerprints.len(), expected.len());
        for h in expected {
            assert!(fingerprints.contains(&[h]));
        }
    }

    #[test]
    fn test_winnow_too_short() {
        assert!(winnow(&[1, 2, 3], 2, 3).is_empty());
        assert!(winnow(&[], 1, 1).is_empty());
        assert_eq!(winnow(&[1, 2, 3, 4], 2, 3).len(), 1);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Fingerprinter::new(0, 4).is_err());
        assert!(Fingerprinter::new(3, 0).is_err());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = Fingerprinter::new(3, 4).unwrap();
        let b = Fingerprinter::new(3, 4).unwrap();
        assert_eq!(a.hash_token("curry"), b.hash_token("curry"));
        assert_ne!(a.hash_token("curry"), a.hash_token("books"));
    }

    #[test]
    fn test_similarity() {
        let fp = Fingerprinter::new(2, 2).unwrap();
        let x = "welcome to jimbocho the town of books and curry";
        let y = "welcome to jimbocho the city of books and curry";
        let sim = fp.similarity(x, y);
        assert!(0. < sim && sim < 1.);
        assert_eq!(sim, fp.similarity(y, x));
        assert_eq!(fp.similarity(x, "nothing in common here at all"), 0.);
    }

    #[test]
    fn test_empty_fingerprints() {
        let fp = Fingerprinter::new(3, 4).unwrap();
        assert!(fp.fingerprint("one two three four five").is_empty());
        assert_eq!(fp.fingerprint("one two three four five six").len(), 1);
        assert_eq!(fp.similarity("", ""), 0.);
    }
}
