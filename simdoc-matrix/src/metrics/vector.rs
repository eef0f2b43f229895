//! Vector-space metrics.
use std::hash::Hash;

use hashbrown::HashMap;

use crate::errors::{Result, SimdocMatrixError};

/// Counts the occurrences of each term.
pub fn term_frequencies<I, T>(terms: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let mut freqs = HashMap::new();
    for term in terms {
        freqs.entry(term).and_modify(|c| *c += 1).or_insert(1);
    }
    freqs
}

/// Computes the cosine similarity of two term-frequency tables,
/// restricted to the terms occurring in both.
///
/// Returns 0 if no term is shared.
///
/// # Examples
///
/// ```
/// use simdoc_matrix::metrics::{cosine_similarity, term_frequencies};
///
/// let x = term_frequencies("I like to read.".split_whitespace());
/// let y = term_frequencies("I love to read.".split_whitespace());
/// assert_eq!(cosine_similarity(&x, &y), 1.0);
/// ```
pub fn cosine_similarity<T>(lhs: &HashMap<T, usize>, rhs: &HashMap<T, usize>) -> f64
where
    T: Hash + Eq,
{
    // Integer sums do not depend on the iteration order.
    let (mut dot, mut norm_l, mut norm_r) = (0u64, 0u64, 0u64);
    for (term, &l) in lhs {
        if let Some(&r) = rhs.get(term) {
            let (l, r) = (l as u64, r as u64);
            dot += l * r;
            norm_l += l * l;
            norm_r += r * r;
        }
    }
    if norm_l == 0 || norm_r == 0 {
        return 0.;
    }
    let sim = dot as f64 / (norm_l as f64 * norm_r as f64).sqrt();
    sim.min(1.)
}

/// Computes the Euclidean distance of two vectors.
///
/// # Errors
///
/// [`SimdocMatrixError::DimensionMismatch`] is returned if the lengths differ.
pub fn euclidean_distance(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    if lhs.len() != rhs.len() {
        return Err(SimdocMatrixError::DimensionMismatch {
            left: lhs.len(),
            right: rhs.len(),
        });
    }
    Ok(lhs
        .iter()
        .zip(rhs)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt())
}

/// Computes `1/(1+d)`, where `d` is the Euclidean distance of two vectors.
///
/// # Errors
///
/// [`SimdocMatrixError::DimensionMismatch`] is returned if the lengths differ.
///
/// # Examples
///
/// ```
/// use simdoc_matrix::metrics::euclidean_similarity;
///
/// assert_eq!(euclidean_similarity(&[1., 2.], &[1., 2.]).unwrap(), 1.);
/// assert_eq!(euclidean_similarity(&[0., 3.], &[4., 0.]).unwrap(), 1. / 6.);
/// assert!(euclidean_similarity(&[0.], &[0., 1.]).is_err());
/// ```
pub fn euclidean_similarity(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    Ok(1. / (1. + euclidean_distance(lhs, rhs)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_frequencies() {
        let freqs = term_frequencies("a b a".split_whitespace());
        assert_eq!(freqs.get("a"), Some(&2));
        assert_eq!(freqs.get("b"), Some(&1));
    }

    #[test]
    fn test_cosine_common_terms_only() {
        // Only "a" and "b" are shared; "c" and "d" do not contribute.
        let x = term_frequencies("a a b c".split_whitespace());
        let y = term_frequencies("a b b d d d".split_whitespace());
        let expected = (2. * 1. + 1. * 2.) / (5f64 * 5.).sqrt();
        assert_eq!(cosine_similarity(&x, &y), expected);
        assert_eq!(cosine_similarity(&y, &x), expected);
    }

    #[test]
    fn test_cosine_disjoint() {
        let x = term_frequencies("a b".split_whitespace());
        let y = term_frequencies("c d".split_whitespace());
        assert_eq!(cosine_similarity(&x, &y), 0.);
    }

    #[test]
    fn test_cosine_empty() {
        let x = term_frequencies("".split_whitespace());
        let y = term_frequencies("c d".split_whitespace());
        assert_eq!(cosine_similarity(&x, &y), 0.);
        assert_eq!(cosine_similarity(&x, &x), 0.);
    }

    #[test]
    fn test_euclidean_mismatch() {
        assert_eq!(
            euclidean_distance(&[1., 2., 3.], &[1.]),
            Err(SimdocMatrixError::DimensionMismatch { left: 3, right: 1 })
        );
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean_distance(&[1., 1.], &[4., 5.]), Ok(5.));
        assert_eq!(euclidean_similarity(&[1., 1.], &[4., 5.]), Ok(1. / 6.));
        assert_eq!(euclidean_similarity(&[], &[]), Ok(1.));
    }
}
