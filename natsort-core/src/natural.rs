//! The natural comparison state machine
//!
//! Two synchronized cursors walk both strings, alternating between
//! numeric-subword mode (digit runs compared by numeric value, leading
//! zeros skipped and kept only as a final tie-break) and word-subword
//! mode (delegated whole-run to a collator, or compared char-by-char
//! without one). Digit runs are never parsed into a bounded integer, so
//! arbitrarily long numeric substrings cannot overflow.

use crate::classify::{fold_compare, is_run_digit, word_run_end};
use crate::collator::TextCollator;
use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// Embedded digit runs compare by numeric value; word runs are handed
/// whole to `collator` when one is given, otherwise compared
/// char-by-char (`case_sensitive` selects raw scalar values or a
/// two-step case fold). `case_sensitive` is ignored when a collator is
/// present since the collator then owns the case rules.
///
/// Total over all inputs: empty strings sort before non-empty ones and
/// no input can make the comparison fail. The collator-free path is
/// only meaningful for 7-bit ASCII content.
pub fn compare_natural(
    s: &str,
    t: &str,
    case_sensitive: bool,
    collator: Option<&dyn TextCollator>,
) -> Ordering {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    let (s_len, t_len) = (s.len(), t.len());
    let mut i = 0;
    let mut j = 0;

    loop {
        // Both cursors sit after a subword (or at zero)
        if i == s_len && j == t_len {
            return Ordering::Equal;
        }
        if i == s_len {
            return Ordering::Less;
        }
        if j == t_len {
            return Ordering::Greater;
        }

        if is_run_digit(s[i]) && is_run_digit(t[j]) {
            match compare_number_runs(&s, &t, &mut i, &mut j) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        } else if let Some(collator) = collator {
            // The collator needs whole subwords; char-by-char is not
            // possible here.
            let sw = i;
            let tw = j;
            i = word_run_end(&s, i);
            j = word_run_end(&t, j);
            let a: String = s[sw..i].iter().collect();
            let b: String = t[tw..j].iter().collect();
            match collator.compare(&a, &b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        } else {
            // No collator: compare char-by-char, advancing both cursors
            // together so the first differing position decides.
            loop {
                if s[i] != t[j] {
                    let ord = if case_sensitive {
                        s[i].cmp(&t[j])
                    } else {
                        fold_compare(s[i], t[j])
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                i += 1;
                j += 1;
                if i == s_len && j == t_len {
                    return Ordering::Equal;
                }
                if i == s_len {
                    return Ordering::Less;
                }
                if j == t_len {
                    return Ordering::Greater;
                }
                if is_run_digit(s[i]) || is_run_digit(t[j]) {
                    break;
                }
            }
        }
    }
}

/// Compare the digit runs starting at `*i` / `*j`.
///
/// On `Equal` both runs were numerically identical with the same
/// leading-zero count; the cursors then rest just past the zeros that
/// were skipped and the caller resumes the outer walk. Any other result
/// ends the whole comparison.
fn compare_number_runs(s: &[char], t: &[char], i: &mut usize, j: &mut usize) -> Ordering {
    let (s_len, t_len) = (s.len(), t.len());

    let mut s_zeros = 0usize;
    while *i < s_len && s[*i] == '0' {
        s_zeros += 1;
        *i += 1;
    }
    let mut t_zeros = 0usize;
    while *j < t_len && t[*j] == '0' {
        t_zeros += 1;
        *j += 1;
    }

    // A run that ended (or hit a non-digit) after its zeros was all
    // zeros; "0" is smaller than any nonzero run.
    let s_all_zero = *i == s_len || !is_run_digit(s[*i]);
    let t_all_zero = *j == t_len || !is_run_digit(t[*j]);
    if s_all_zero && t_all_zero {
        return Ordering::Equal;
    }
    if s_all_zero {
        return Ordering::Less;
    }
    if t_all_zero {
        return Ordering::Greater;
    }

    // Both runs have nonzero digits. Record the first digit difference
    // but keep walking: the comparison is only decided once the run
    // lengths are known, since a longer run is numerically larger no
    // matter how its digits compare.
    let mut diff = Ordering::Equal;
    loop {
        if diff == Ordering::Equal {
            diff = s[*i].cmp(&t[*j]);
        }
        *i += 1;
        *j += 1;
        if *i == s_len && *j == t_len {
            return if diff != Ordering::Equal {
                diff
            } else {
                // Identical digit content: fewer leading zeros first
                s_zeros.cmp(&t_zeros)
            };
        }
        if *i == s_len {
            if diff == Ordering::Equal {
                return Ordering::Less;
            }
            return if is_run_digit(t[*j]) { Ordering::Less } else { diff };
        }
        if *j == t_len {
            if diff == Ordering::Equal {
                return Ordering::Greater;
            }
            return if is_run_digit(s[*i]) { Ordering::Greater } else { diff };
        }
        let s_digit = is_run_digit(s[*i]);
        let t_digit = is_run_digit(t[*j]);
        if !s_digit && !t_digit {
            // Both runs ended together with equal length
            if diff != Ordering::Equal {
                return diff;
            }
            // Equal value; leading-zero counts still distinguish runs
            if s_zeros != t_zeros {
                return s_zeros.cmp(&t_zeros);
            }
            return Ordering::Equal;
        }
        if !s_digit {
            return Ordering::Less;
        }
        if !t_digit {
            return Ordering::Greater;
        }
    }
}

/// Null-aware wrapper around [`compare_natural`].
///
/// `None` sorts before any present string; two `None` values are equal.
pub fn compare_natural_opt(
    s: Option<&str>,
    t: Option<&str>,
    case_sensitive: bool,
    collator: Option<&dyn TextCollator>,
) -> Ordering {
    match (s, t) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(s), Some(t)) => compare_natural(s, t, case_sensitive, collator),
    }
}
