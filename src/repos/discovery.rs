//! Git repository discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::constants::REPO_MARKER;

/// True when `path` contains a repository marker entry.
pub fn is_repository(path: &Path) -> bool {
    path.join(REPO_MARKER).exists()
}

/// Immediate subdirectories of `parent` that are repositories, sorted by
/// path. Nested repositories are not searched for.
pub fn find_repositories(parent: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(parent)
        .context(format!("Failed to read directory: {}", parent.display()))?;

    let mut repos = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.is_dir() && is_repository(&path) {
            debug!("Found repository: {}", path.display());
            repos.push(path);
        }
    }

    repos.sort();
    Ok(repos)
}
