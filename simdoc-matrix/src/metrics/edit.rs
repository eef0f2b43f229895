//! Edit-based metrics on characters.
use crate::errors::{Result, SimdocMatrixError};

/// Computes the Levenshtein distance between two strings in characters.
///
/// # Examples
///
/// ```
/// use simdoc_matrix::metrics::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(lhs: &str, rhs: &str) -> usize {
    let a: Vec<char> = lhs.chars().collect();
    let b: Vec<char> = rhs.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows of the (m+1)x(n+1) table, keeping only the previous one.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Computes the Levenshtein distance divided by the length of the longer string.
/// Two empty strings have distance 0.
pub fn normalized_levenshtein_distance(lhs: &str, rhs: &str) -> f64 {
    let max_len = lhs.chars().count().max(rhs.chars().count());
    if max_len == 0 {
        return 0.;
    }
    levenshtein_distance(lhs, rhs) as f64 / max_len as f64
}

/// Computes one minus [`normalized_levenshtein_distance`].
pub fn levenshtein_similarity(lhs: &str, rhs: &str) -> f64 {
    1. - normalized_levenshtein_distance(lhs, rhs)
}

/// Computes the number of positions at which the characters differ.
///
/// # Errors
///
/// [`SimdocMatrixError::LengthMismatch`] is returned if the strings have
/// different numbers of characters.
pub fn hamming_distance(lhs: &str, rhs: &str) -> Result<usize> {
    let (m, n) = (lhs.chars().count(), rhs.chars().count());
    if m != n {
        return Err(SimdocMatrixError::LengthMismatch { left: m, right: n });
    }
    Ok(lhs.chars().zip(rhs.chars()).filter(|(a, b)| a != b).count())
}

/// Computes the Hamming distance divided by the length.
/// Two empty strings have distance 0.
///
/// # Errors
///
/// [`SimdocMatrixError::LengthMismatch`] is returned if the strings have
/// different numbers of characters.
pub fn normalized_hamming_distance(lhs: &str, rhs: &str) -> Result<f64> {
    let dist = hamming_distance(lhs, rhs)?;
    let len = lhs.chars().count();
    if len == 0 {
        return Ok(0.);
    }
    Ok(dist as f64 / len as f64)
}

/// Computes one minus [`normalized_hamming_distance`].
///
/// # Errors
///
/// [`SimdocMatrixError::LengthMismatch`] is returned if the strings have
/// different numbers of characters.
pub fn hamming_similarity(lhs: &str, rhs: &str) -> Result<f64> {
    Ok(1. - normalized_hamming_distance(lhs, rhs)?)
}
