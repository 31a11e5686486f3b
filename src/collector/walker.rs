//! Directory traversal and pattern filtering.

use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::collector::patterns::PatternSet;
use crate::errors::CollectError;

/// Walk `source_root` and return the relative paths of every regular file
/// selected by `patterns`, sorted lexicographically.
///
/// A file is selected when any pattern matches its relative path or its bare
/// filename, or when the set is empty. Entries that cannot be read are
/// logged and skipped so the scan keeps going.
pub(crate) fn scan_tree(
    source_root: &Path,
    patterns: &PatternSet,
) -> Result<Vec<String>, CollectError> {
    if !source_root.exists() {
        return Err(CollectError::SourceRootMissing(source_root.to_path_buf()));
    }

    let mut matched = Vec::new();

    for entry in WalkDir::new(source_root).follow_links(false).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Directories and symlinks are never collected
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(source_root) {
            Ok(relative) => normalize_path_for_matching(relative),
            Err(e) => {
                warn!(
                    "Skipping entry outside source root {}: {}",
                    entry.path().display(),
                    e
                );
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();

        if patterns.is_empty() || patterns.matches(&relative) || patterns.matches(&file_name) {
            debug!("Matched file: {}", relative);
            matched.push(relative);
        }
    }

    matched.sort();
    Ok(matched)
}

/// Normalize a relative path to forward slashes regardless of platform.
fn normalize_path_for_matching(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
