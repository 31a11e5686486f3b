//! Copy execution for collected files.

use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::errors::CollectError;

/// Outcome of a completed copy run.
#[derive(Debug, Clone)]
pub struct CopySummary {
    /// Relative paths copied, in copy order.
    pub files: Vec<String>,
    /// Total content bytes written.
    pub bytes_copied: u64,
}

impl CopySummary {
    /// Number of files copied.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Copy `relative_paths` from `source_root` into `dest_root`, recreating the
/// relative directory structure and overwriting files already present.
///
/// An empty list is an error and leaves the destination untouched. The first
/// I/O failure aborts the remaining copies; files already copied stay in
/// place.
pub(crate) fn copy_files(
    source_root: &Path,
    dest_root: &Path,
    relative_paths: Vec<String>,
) -> Result<CopySummary, CollectError> {
    if relative_paths.is_empty() {
        return Err(CollectError::NothingToCopy);
    }

    fs::create_dir_all(dest_root).map_err(|e| copy_error(dest_root, e))?;

    let mut bytes_copied = 0u64;
    for relative in &relative_paths {
        let source = source_root.join(relative);
        let dest = dest_root.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| copy_error(parent, e))?;
        }

        let bytes = fs::copy(&source, &dest).map_err(|e| copy_error(&source, e))?;
        debug!("Copied {} ({} bytes)", relative, bytes);
        bytes_copied += bytes;
    }

    Ok(CopySummary {
        files: relative_paths,
        bytes_copied,
    })
}

fn copy_error(path: &Path, source: std::io::Error) -> CollectError {
    error!("Copy failed at {}: {}", path.display(), source);
    CollectError::Copy {
        path: path.to_path_buf(),
        source,
    }
}
