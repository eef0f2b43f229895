use std::iter;

/// Iterator over overlapping character windows of a string slice.
pub struct ShingleIter<'a> {
    text: &'a str,
    window_size: usize,
    position: usize,
}

impl<'a> ShingleIter<'a> {
    pub fn new(text: &'a str, window_size: usize) -> Self {
        assert!(window_size >= 1);
        Self {
            text,
            window_size,
            position: 0,
        }
    }
}

impl<'a> Iterator for ShingleIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.position..];
        let end = rest
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(rest.len()))
            .skip(1)
            .nth(self.window_size - 1)?;
        let window = &rest[..end];
        self.position += rest.chars().next()?.len_utf8();
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q1() {
        let mut iter = ShingleIter::new("abc", 1);
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), Some("b"));
        assert_eq!(iter.next(), Some("c"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q2() {
        let mut iter = ShingleIter::new("abc", 2);
        assert_eq!(iter.next(), Some("ab"));
        assert_eq!(iter.next(), Some("bc"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q3() {
        let mut iter = ShingleIter::new("abc", 3);
        assert_eq!(iter.next(), Some("abc"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q4() {
        let mut iter = ShingleIter::new("abc", 4);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_multibyte() {
        let shingles: Vec<_> = ShingleIter::new("神保町", 2).collect();
        assert_eq!(shingles, vec!["神保", "保町"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(ShingleIter::new("", 1).next(), None);
    }
}
