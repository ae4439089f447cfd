//! Comparator configuration surface
//!
//! A [`Natural`] value pins down one comparator configuration (case
//! sensitivity plus an optional collator). The four stock
//! configurations are exposed as constructors; anything else goes
//! through [`NaturalBuilder`], which validates at build time.

use crate::collator::{default_collator, TextCollator};
use crate::error::{ConfigError, Result};
use crate::natural::{compare_natural, compare_natural_opt};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// How word subwords are collated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Raw scalar-value comparison, no collator involved.
    #[default]
    CodePoint,
    /// Delegate word subwords to an injected collator.
    Locale,
}

/// A configured natural-order comparator.
///
/// Cheap to clone (the collator is shared behind an `Arc`) and safe to
/// use concurrently; a comparison call touches no shared mutable state.
#[derive(Clone)]
pub struct Natural {
    case_sensitive: bool,
    collator: Option<Arc<dyn TextCollator>>,
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Natural")
            .field("case_sensitive", &self.case_sensitive)
            .field("collator", &self.collator.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl Natural {
    /// Case-sensitive scalar-value comparison of word runs.
    ///
    /// Do not use if inputs may contain more than 7-bit ASCII.
    pub fn ascii() -> Self {
        Self {
            case_sensitive: true,
            collator: None,
        }
    }

    /// Like [`Natural::ascii`] but ignoring upper/lower case.
    pub fn ascii_ignore_case() -> Self {
        Self {
            case_sensitive: false,
            collator: None,
        }
    }

    /// Delegate word runs to the given collator.
    ///
    /// The collator owns the case rules; the case-sensitivity flag does
    /// not apply on this path.
    pub fn with_collator(collator: Arc<dyn TextCollator>) -> Self {
        Self {
            case_sensitive: true,
            collator: Some(collator),
        }
    }

    /// Delegate word runs to the process default collator.
    ///
    /// The default collator is resolved once per process and shared;
    /// see [`default_collator`].
    pub fn default_locale() -> Self {
        Self::with_collator(default_collator())
    }

    /// Start building a custom configuration.
    pub fn builder() -> NaturalBuilder {
        NaturalBuilder::default()
    }

    /// Whether word runs compare case-sensitively on the collator-free
    /// path.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Compare two strings under this configuration.
    pub fn compare(&self, s: &str, t: &str) -> Ordering {
        compare_natural(s, t, self.case_sensitive, self.collator.as_deref())
    }

    /// Null-aware comparison: `None` sorts before any present string.
    pub fn compare_opt(&self, s: Option<&str>, t: Option<&str>) -> Ordering {
        compare_natural_opt(s, t, self.case_sensitive, self.collator.as_deref())
    }

    /// Sort a slice of strings in place under this configuration.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

/// Builder for [`Natural`] configurations.
///
/// Defaults to code-point collation, case-sensitive. Selecting
/// [`Collation::Locale`] without supplying a collator is a
/// configuration error surfaced by [`NaturalBuilder::build`], never
/// deferred to the first comparison.
pub struct NaturalBuilder {
    case_sensitive: bool,
    collation: Collation,
    collator: Option<Arc<dyn TextCollator>>,
}

impl Default for NaturalBuilder {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            collation: Collation::CodePoint,
            collator: None,
        }
    }
}

impl fmt::Debug for NaturalBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaturalBuilder")
            .field("case_sensitive", &self.case_sensitive)
            .field("collation", &self.collation)
            .field("collator", &self.collator.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl NaturalBuilder {
    /// Set case sensitivity for the collator-free path.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Select the collation mode.
    pub fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Supply a collator; implies [`Collation::Locale`].
    pub fn collator(mut self, collator: Arc<dyn TextCollator>) -> Self {
        self.collation = Collation::Locale;
        self.collator = Some(collator);
        self
    }

    /// Validate and build the comparator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::CollatorRequired`] when locale collation is
    /// selected with no collator. Handling this here keeps the bug from
    /// surfacing later in unrelated code that happens to sort with the
    /// comparator.
    pub fn build(self) -> Result<Natural> {
        match self.collation {
            Collation::Locale => {
                let collator = self.collator.ok_or(ConfigError::CollatorRequired)?;
                Ok(Natural {
                    case_sensitive: true,
                    collator: Some(collator),
                })
            }
            Collation::CodePoint => Ok(Natural {
                case_sensitive: self.case_sensitive,
                collator: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collator::CaseFoldCollator;

    #[test]
    fn test_stock_configurations() {
        assert_eq!(Natural::ascii().compare("a2", "a10"), Ordering::Less);
        assert_eq!(
            Natural::ascii_ignore_case().compare("File2", "file10"),
            Ordering::Less
        );
        assert_eq!(
            Natural::default_locale().compare("File2", "file10"),
            Ordering::Less
        );
        assert_eq!(
            Natural::with_collator(Arc::new(CaseFoldCollator)).compare("B1", "a2"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_builder_requires_collator_for_locale() {
        let err = Natural::builder()
            .collation(Collation::Locale)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::CollatorRequired);
    }

    #[test]
    fn test_builder_code_point_path() {
        let cmp = Natural::builder().case_sensitive(false).build().unwrap();
        assert_eq!(cmp.compare("ABC", "abc"), Ordering::Equal);
        assert!(!cmp.is_case_sensitive());
    }

    #[test]
    fn test_builder_collator_implies_locale() {
        let cmp = Natural::builder()
            .collator(Arc::new(CaseFoldCollator))
            .build()
            .unwrap();
        assert_eq!(cmp.compare("x2", "X10"), Ordering::Less);
    }

    #[test]
    fn test_compare_opt_null_ordering() {
        let cmp = Natural::ascii();
        assert_eq!(cmp.compare_opt(None, None), Ordering::Equal);
        assert_eq!(cmp.compare_opt(None, Some("x")), Ordering::Less);
        assert_eq!(cmp.compare_opt(Some("x"), None), Ordering::Greater);
    }

    #[test]
    fn test_sort_helper() {
        let mut items = vec!["img10", "img2", "img1"];
        Natural::ascii().sort(&mut items);
        assert_eq!(items, vec!["img1", "img2", "img10"]);
    }

    #[test]
    fn test_clone_shares_collator() {
        let cmp = Natural::default_locale();
        let cloned = cmp.clone();
        assert_eq!(
            cmp.compare("a1", "A01"),
            cloned.compare("a1", "A01")
        );
    }
}
