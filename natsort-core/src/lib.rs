//! Natural-order string comparison with locale-aware collation
//!
//! This crate provides a family of total-order string comparators that
//! sort the way humans expect: embedded digit runs compare by numeric
//! value rather than character code, non-numeric runs compare either by
//! scalar value or through an injected [`TextCollator`], and a derived
//! surname-first ordering handles person-name sorting.
//!
//! All comparators are pure values with no shared mutable state; they
//! can be used as `sort_by` keys from any number of threads.

#![warn(missing_docs)]

pub mod classify;
pub mod collator;
pub mod comparator;
pub mod error;
pub mod name_order;
pub mod natural;

// Re-export key types
pub use collator::{default_collator, CaseFoldCollator, CodePointCollator, TextCollator};
pub use comparator::{Collation, Natural, NaturalBuilder};
pub use error::{ConfigError, Result};
pub use name_order::NameOrder;
pub use natural::{compare_natural, compare_natural_opt};

use std::cmp::Ordering;

// Convenience functions

/// Compare two strings naturally using each character's scalar value
/// for non-digit runs.
///
/// Only meaningful for 7-bit ASCII content; non-ASCII input without a
/// collator is compared by raw scalar value.
pub fn compare_natural_ascii(s: &str, t: &str) -> Ordering {
    compare_natural(s, t, true, None)
}

/// Compare two strings naturally, ignoring upper/lower case differences
/// in non-digit runs.
///
/// Only meaningful for 7-bit ASCII content, like
/// [`compare_natural_ascii`].
pub fn compare_natural_ignore_case_ascii(s: &str, t: &str) -> Ordering {
    compare_natural(s, t, false, None)
}

/// Compare two strings naturally with the process default collator.
///
/// The default collator is resolved once per process; see
/// [`default_collator`].
pub fn compare_natural_default(s: &str, t: &str) -> Ordering {
    compare_natural(s, t, false, Some(default_collator().as_ref()))
}
