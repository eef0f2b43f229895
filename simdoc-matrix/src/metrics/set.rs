//! Set-based metrics.
use std::hash::Hash;

use hashbrown::HashSet;

/// Computes the Jaccard similarity, the size of the intersection divided by
/// the size of the union. Returns `None` if both inputs are empty.
///
/// # Examples
///
/// ```
/// use simdoc_matrix::metrics::jaccard_similarity;
///
/// let x = "I like to read.".split_whitespace();
/// let y = "I love to read.".split_whitespace();
/// assert_eq!(jaccard_similarity(x, y), Some(0.6));
/// ```
pub fn jaccard_similarity<I, T>(lhs: I, rhs: I) -> Option<f64>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    jaccard_index(&a, &b)
}

/// Computes the Jaccard similarity of two built sets.
pub fn jaccard_index<T>(a: &HashSet<T>, b: &HashSet<T>) -> Option<f64>
where
    T: Hash + Eq,
{
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return None;
    }
    Some(intersection as f64 / union as f64)
}

/// Computes the overlap coefficient, the size of the intersection divided by
/// the size of the smaller set. Returns `None` if the smaller set is empty.
///
/// # Examples
///
/// ```
/// use simdoc_matrix::metrics::overlap_coefficient;
///
/// let x = "I like to read.".split_whitespace();
/// let y = "I love to read.".split_whitespace();
/// assert_eq!(overlap_coefficient(x, y), Some(0.75));
/// ```
pub fn overlap_coefficient<I, T>(lhs: I, rhs: I) -> Option<f64>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    overlap_index(&a, &b)
}

/// Computes the overlap coefficient of two built sets.
pub fn overlap_index<T>(a: &HashSet<T>, b: &HashSet<T>) -> Option<f64>
where
    T: Hash + Eq,
{
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return None;
    }
    Some(a.intersection(b).count() as f64 / smaller as f64)
}

/// Iterates over the overlapping n-grams of words.
///
/// # Panics
///
/// It will panic if `n` is 0.
pub fn word_ngrams<'a, T>(words: &'a [T], n: usize) -> impl Iterator<Item = &'a [T]> {
    assert!(n >= 1);
    words.windows(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard() {
        assert_eq!(jaccard_similarity(vec![1, 2, 4], vec![1, 2, 5, 7]), Some(0.4));
        assert_eq!(jaccard_similarity(vec![1, 1, 2], vec![2, 1]), Some(1.));
        assert_eq!(jaccard_similarity(vec![1, 2], vec![3]), Some(0.));
    }

    #[test]
    fn test_jaccard_empty() {
        assert_eq!(jaccard_similarity(Vec::<u32>::new(), vec![]), None);
        assert_eq!(jaccard_similarity(vec![], vec![3]), Some(0.));
    }

    #[test]
    fn test_jaccard_bigrams() {
        let x: Vec<_> = "a b c d".split_whitespace().collect();
        let y: Vec<_> = "a b c e".split_whitespace().collect();
        // {ab, bc, cd} and {ab, bc, ce}
        assert_eq!(
            jaccard_similarity(word_ngrams(&x, 2), word_ngrams(&y, 2)),
            Some(0.5)
        );
    }

    #[test]
    #[should_panic]
    fn test_word_ngrams_zero() {
        let words = ["a", "b"];
        let _ = word_ngrams(&words, 0).count();
    }

    #[test]
    fn test_overlap() {
        assert_eq!(overlap_coefficient(vec![1, 2], vec![1, 2, 5, 7]), Some(1.));
        assert_eq!(overlap_coefficient(vec![1, 3], vec![1, 2, 5]), Some(0.5));
        assert_eq!(overlap_coefficient(vec![], vec![1, 2, 5]), None);
    }

    #[test]
    fn test_symmetry() {
        let x = "the town of books and curry".split_whitespace();
        let y = "the city of books".split_whitespace();
        assert_eq!(
            jaccard_similarity(x.clone(), y.clone()),
            jaccard_similarity(y.clone(), x.clone())
        );
        assert_eq!(overlap_coefficient(x.clone(), y.clone()), overlap_coefficient(y, x));
    }
}
