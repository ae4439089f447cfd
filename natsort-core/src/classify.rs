//! Character classification and subword scanning
//!
//! A string decomposes into alternating maximal runs of digit and
//! non-digit characters ("subwords"). The comparator state machine
//! never materializes this decomposition, but the [`subwords`] iterator
//! exposes it for callers and for testing the decomposition invariants.

use std::cmp::Ordering;

/// Whether a character belongs to a numeric subword.
///
/// Classification is restricted to ASCII decimal digits: positional
/// digit-value comparison and leading-`'0'` skipping are only coherent
/// inside one decimal block. Other numeric scripts flow through the
/// word path.
#[inline]
pub fn is_run_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Compare two characters ignoring case.
///
/// Uppercase forms are compared first; if those differ, the lowercase
/// forms decide. The two-step fold catches scripts where upper-casing
/// alone is not injective.
pub fn fold_compare(a: char, b: char) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.to_uppercase().cmp(b.to_uppercase()) == Ordering::Equal {
        return Ordering::Equal;
    }
    a.to_lowercase().cmp(b.to_lowercase())
}

/// Advance past the non-digit run starting at `idx`.
///
/// Consumes at least one character; returns the index one past the end
/// of the run (the string end or the first digit).
#[inline]
pub(crate) fn word_run_end(chars: &[char], mut idx: usize) -> usize {
    idx += 1;
    while idx < chars.len() && !is_run_digit(chars[idx]) {
        idx += 1;
    }
    idx
}

/// A maximal same-class run within a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subword<'a> {
    /// The run's text.
    pub text: &'a str,
    /// True for a digit run, false for a word run.
    pub numeric: bool,
}

/// Iterate over the subwords of `s` in order.
///
/// The decomposition is unique and total: every character belongs to
/// exactly one subword, and consecutive subwords alternate class.
pub fn subwords(s: &str) -> impl Iterator<Item = Subword<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let numeric = is_run_digit(first);
        let end = rest
            .char_indices()
            .find(|&(_, c)| is_run_digit(c) != numeric)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(Subword { text: run, numeric })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_classification() {
        assert!(is_run_digit('0'));
        assert!(is_run_digit('9'));
        assert!(!is_run_digit('a'));
        assert!(!is_run_digit(' '));
        // Non-ASCII digits are word characters for run purposes
        assert!(!is_run_digit('٣'));
        assert!(!is_run_digit('五'));
    }

    #[test]
    fn test_fold_compare() {
        assert_eq!(fold_compare('a', 'A'), Ordering::Equal);
        assert_eq!(fold_compare('a', 'a'), Ordering::Equal);
        assert_eq!(fold_compare('a', 'B'), Ordering::Less);
        assert_eq!(fold_compare('B', 'a'), Ordering::Greater);
        assert_eq!(fold_compare('é', 'É'), Ordering::Equal);
    }

    #[test]
    fn test_subwords_alternate() {
        let runs: Vec<_> = subwords("img12ab3").collect();
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0].text, "img");
        assert!(!runs[0].numeric);
        assert_eq!(runs[1].text, "12");
        assert!(runs[1].numeric);
        assert_eq!(runs[2].text, "ab");
        assert_eq!(runs[3].text, "3");
        assert!(runs[3].numeric);
    }

    #[test]
    fn test_subwords_total_decomposition() {
        for input in ["", "abc", "123", "a1b2", "00x", "日本語42"] {
            let joined: String = subwords(input).map(|w| w.text).collect();
            assert_eq!(joined, input);
            // No empty runs, classes alternate
            let runs: Vec<_> = subwords(input).collect();
            for w in &runs {
                assert!(!w.text.is_empty());
            }
            for pair in runs.windows(2) {
                assert_ne!(pair[0].numeric, pair[1].numeric);
            }
        }
    }

    #[test]
    fn test_word_run_end() {
        let chars: Vec<char> = "abc12".chars().collect();
        assert_eq!(word_run_end(&chars, 0), 3);
        let chars: Vec<char> = "x".chars().collect();
        assert_eq!(word_run_end(&chars, 0), 1);
    }
}
