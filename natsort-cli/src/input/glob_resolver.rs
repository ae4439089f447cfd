//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoMatches(patterns.join(", ")).into());
    }

    // Deterministic read order regardless of pattern order
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");
        fs::write(&file_path, "x\n").unwrap();

        let files = resolve_patterns(&[file_path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_resolve_glob_pattern() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.log"] {
            fs::write(temp_dir.path().join(name), "x\n").unwrap();
        }

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().into_owned();
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let result = resolve_patterns(&["/nonexistent/dir/*.txt".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_patterns_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");
        fs::write(&file_path, "x\n").unwrap();
        let p = file_path.to_string_lossy().into_owned();

        let files = resolve_patterns(&[p.clone(), p]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
