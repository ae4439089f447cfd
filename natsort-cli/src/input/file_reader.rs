//! Line collection from files and stdin

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Collects input lines for sorting
pub struct LineReader;

impl LineReader {
    /// Read a UTF-8 file and split it into lines
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| CliError::FileNotFound(path.display().to_string()))?;

        Ok(Self::split_lines(&content))
    }

    /// Read all of stdin and split it into lines
    pub fn read_stdin() -> Result<Vec<String>> {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;

        Ok(Self::split_lines(&content))
    }

    /// Collect lines from every file, in file order
    pub fn read_all(paths: &[std::path::PathBuf]) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for path in paths {
            lines.extend(Self::read_lines(path)?);
        }
        Ok(lines)
    }

    fn split_lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_owned).collect()
    }
}
