//! Pattern-driven file collection.
//!
//! [`FileCollector`] scans a source tree for regular files matching glob
//! patterns and can copy the matches into a destination tree, preserving
//! their relative paths.

mod copier;
mod patterns;
mod walker;

pub use copier::CopySummary;

use std::path::{Path, PathBuf};

use crate::errors::CollectError;
use patterns::PatternSet;

/// Collects regular files under a source root by glob pattern.
///
/// Patterns use `*` (any run of characters, separators included) and `?`
/// (exactly one character); everything else is literal. Matching is
/// case-insensitive and a file is kept when any pattern matches either its
/// relative path or its bare filename. With no patterns registered, every
/// regular file is kept.
pub struct FileCollector {
    source_root: PathBuf,
    patterns: Vec<String>,
}

impl FileCollector {
    /// Create a collector rooted at `source_root` with no patterns.
    pub fn new<P: Into<PathBuf>>(source_root: P) -> Self {
        FileCollector {
            source_root: source_root.into(),
            patterns: Vec::new(),
        }
    }

    /// Register an additional glob pattern. Any string is accepted.
    pub fn add_pattern<S: Into<String>>(&mut self, glob: S) {
        self.patterns.push(glob.into());
    }

    /// The root this collector scans.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Registered patterns, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Scan the tree and return the sorted relative paths of every matching
    /// regular file.
    ///
    /// Unreadable entries are logged and skipped. A missing source root is
    /// reported as [`CollectError::SourceRootMissing`] rather than a panic.
    pub fn collect(&self) -> Result<Vec<String>, CollectError> {
        let patterns = PatternSet::compile(&self.patterns);
        walker::scan_tree(&self.source_root, &patterns)
    }

    /// Run a fresh scan and copy every match under `dest_root`, overwriting
    /// files already present there.
    ///
    /// Fails with [`CollectError::NothingToCopy`] when the scan matches
    /// nothing; the destination root is not created in that case.
    pub fn copy_to<P: AsRef<Path>>(&self, dest_root: P) -> Result<CopySummary, CollectError> {
        let files = self.collect()?;
        copier::copy_files(&self.source_root, dest_root.as_ref(), files)
    }
}
