//! Surname-first ordering for person names
//!
//! Sorts names like "title givenname surname" by the trailing word
//! first, falling back to the full string when surnames tie. Built
//! entirely on the natural comparator; carries no state of its own
//! beyond the configured comparator.

use crate::comparator::Natural;
use std::cmp::Ordering;

/// Compares names by their trailing word (the surname), then by the
/// full string as a deterministic tie-break.
#[derive(Debug, Clone)]
pub struct NameOrder {
    natural: Natural,
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl NameOrder {
    /// Surname-first ordering over the process default collator.
    pub fn new() -> Self {
        Self {
            natural: Natural::default_locale(),
        }
    }

    /// Surname-first ordering over a custom natural comparator.
    pub fn with_natural(natural: Natural) -> Self {
        Self { natural }
    }

    /// Compare two names surname-first.
    ///
    /// `None` sorts before any present name and empty sorts before
    /// non-empty. A name without a space is its own surname and, when
    /// surnames tie, sorts before a name that had a space.
    pub fn compare(&self, o1: Option<&str>, o2: Option<&str>) -> Ordering {
        match (o1, o2) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(o1), Some(o2)) => self.compare_names(o1, o2),
        }
    }

    /// Like [`NameOrder::compare`] but lower-casing both names first.
    pub fn compare_ignore_case(&self, o1: Option<&str>, o2: Option<&str>) -> Ordering {
        match (o1, o2) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(o1), Some(o2)) => {
                self.compare_names(&o1.to_lowercase(), &o2.to_lowercase())
            }
        }
    }

    fn compare_names(&self, o1: &str, o2: &str) -> Ordering {
        if o1.is_empty() && o2.is_empty() {
            return Ordering::Equal;
        }
        if o1.is_empty() {
            return Ordering::Less;
        }
        if o2.is_empty() {
            return Ordering::Greater;
        }
        // Surname starts after the last space; without a space the
        // whole string is the surname.
        let (l1, spaced1) = match o1.rfind(' ') {
            Some(i) => (i + 1, true),
            None => (0, false),
        };
        let (l2, spaced2) = match o2.rfind(' ') {
            Some(i) => (i + 1, true),
            None => (0, false),
        };
        let c = self.natural.compare(&o1[l1..], &o2[l2..]);
        if c != Ordering::Equal {
            return c;
        }
        match (spaced1, spaced2) {
            // Already proven equal by the surname comparison
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => self.natural.compare(o1, o2),
        }
    }
}
