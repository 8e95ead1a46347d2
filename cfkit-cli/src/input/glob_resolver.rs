//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// List every file below `dir`, sorted
pub fn resolve_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::FileNotFound(dir.display().to_string()).into());
    }

    let pattern = format!("{}/**/*", Pattern::escape(&dir.to_string_lossy()));
    let mut files = Vec::new();
    let paths =
        glob(&pattern).with_context(|| format!("Invalid directory: {}", dir.display()))?;
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error reading {}", dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
