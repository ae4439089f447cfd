//! Configuration error types

use thiserror::Error;

/// Errors raised while building a comparator configuration.
///
/// Comparisons themselves are total and never fail; only invalid
/// configuration is rejected, and it is rejected at build time rather
/// than on first use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Locale collation was selected without providing a collator.
    #[error("locale collation requires a collator; use an ASCII variant for collator-free comparison")]
    CollatorRequired,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
