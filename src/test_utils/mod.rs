//! Test utilities for treegather
//!
//! This module provides common helpers for building throwaway directory
//! trees in unit tests.

#![cfg(test)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory that is automatically cleaned up
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates `relative` under `root` with `content`, making parent directories
pub fn write_file(root: &Path, relative: &str, content: &[u8]) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a temporary tree holding `a.txt`, `sub/b.cpp` and `sub/c.md`
pub fn create_sample_tree() -> Result<TempDir> {
    let temp_dir = create_temp_dir()?;
    write_file(temp_dir.path(), "a.txt", b"alpha")?;
    write_file(temp_dir.path(), "sub/b.cpp", b"int main() { return 0; }")?;
    write_file(temp_dir.path(), "sub/c.md", b"# notes")?;
    Ok(temp_dir)
}
