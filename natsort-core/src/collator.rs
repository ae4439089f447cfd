//! The text collator capability
//!
//! Locale-sensitive comparison of non-numeric subwords is delegated to
//! an injected [`TextCollator`]. The comparator engine never constructs
//! locale data itself; it only consumes the capability. Two built-in
//! collators cover the common collator-free cases, and the process
//! default is resolved exactly once.

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

/// Locale-sensitive comparison of non-numeric text.
///
/// Implementations must be a valid total order over the strings they
/// are given (the engine only hands them non-digit runs). Locale
/// behavior is otherwise unconstrained.
pub trait TextCollator: Send + Sync {
    /// Compare two word subwords.
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str {
        "collator"
    }
}

/// Case-insensitive collation by Unicode case folding.
///
/// Compares the uppercase forms of both subwords first and falls back
/// to the lowercase forms, for scripts where upper-casing alone is not
/// injective. Strings differing only in case compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldCollator;

impl TextCollator for CaseFoldCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match a.to_uppercase().cmp(&b.to_uppercase()) {
            Ordering::Equal => a.to_lowercase().cmp(&b.to_lowercase()),
            ord => ord,
        }
    }

    fn name(&self) -> &'static str {
        "case-fold"
    }
}

/// Raw scalar-value collation.
///
/// Deterministic and locale-free; equivalent to `str::cmp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointCollator;

impl TextCollator for CodePointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &'static str {
        "code-point"
    }
}

static DEFAULT_COLLATOR: OnceLock<Arc<dyn TextCollator>> = OnceLock::new();

/// The process default collator, resolved on first use and shared.
///
/// The default is [`CaseFoldCollator`]. Callers wanting real locale
/// tables should inject their own [`TextCollator`] instead of relying
/// on the default.
pub fn default_collator() -> Arc<dyn TextCollator> {
    DEFAULT_COLLATOR
        .get_or_init(|| Arc::new(CaseFoldCollator))
        .clone()
}
