//! natsort CLI library
//!
//! Command-line natural-order sorting: reads lines from files or
//! stdin, sorts them with a comparator from `natsort-core`, and writes
//! them back out as text or JSON.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod sorter;

pub use error::{CliError, CliResult};
