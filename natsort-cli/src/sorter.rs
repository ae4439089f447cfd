//! Comparator selection and line sorting

use natsort_core::{NameOrder, Natural};
use rayon::slice::ParallelSliceMut;
use std::cmp::Ordering;

/// The comparator a sort run uses for each line pair
#[derive(Clone)]
pub enum LineComparator {
    /// Plain natural order
    Natural(Natural),
    /// Surname-first natural order
    LastFirst {
        /// The configured name-order comparator
        order: NameOrder,
        /// Lower-case both names before comparing
        ignore_case: bool,
    },
}

impl LineComparator {
    /// Natural order with the process default collator
    pub fn natural() -> Self {
        LineComparator::Natural(Natural::default_locale())
    }

    /// Natural order over raw scalar values (7-bit ASCII content)
    pub fn ascii(ignore_case: bool) -> Self {
        LineComparator::Natural(if ignore_case {
            Natural::ascii_ignore_case()
        } else {
            Natural::ascii()
        })
    }

    /// Surname-first ordering
    pub fn last_first(ignore_case: bool) -> Self {
        LineComparator::LastFirst {
            order: NameOrder::new(),
            ignore_case,
        }
    }

    /// Compare two lines
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            LineComparator::Natural(natural) => natural.compare(a, b),
            LineComparator::LastFirst {
                order,
                ignore_case: false,
            } => order.compare(Some(a), Some(b)),
            LineComparator::LastFirst {
                order,
                ignore_case: true,
            } => order.compare_ignore_case(Some(a), Some(b)),
        }
    }
}

/// Post-sort adjustments
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOptions {
    /// Reverse the sorted order
    pub reverse: bool,
    /// Drop lines that compare equal to their predecessor
    pub unique: bool,
    /// Sort with rayon's parallel merge sort
    pub parallel: bool,
}

/// Sort `lines` in place under `comparator`, then apply the options.
///
/// Both the sequential and the parallel sort are stable, so sorting an
/// already-sorted list reproduces it exactly.
pub fn sort_lines(lines: &mut Vec<String>, comparator: &LineComparator, options: SortOptions) {
    if options.parallel {
        lines.par_sort_by(|a, b| comparator.compare(a, b));
    } else {
        lines.sort_by(|a, b| comparator.compare(a, b));
    }

    if options.unique {
        lines.dedup_by(|a, b| comparator.compare(a, b) == Ordering::Equal);
    }
    if options.reverse {
        lines.reverse();
    }
}
