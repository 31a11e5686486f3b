//! Error types for collection and copy operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by a collect or copy run.
///
/// Per-entry traversal problems are deliberately absent: the walker logs and
/// skips them so a single unreadable entry cannot abort a scan.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The configured source root did not exist when the scan started.
    #[error("source root does not exist: {}", .0.display())]
    SourceRootMissing(PathBuf),

    /// A copy was requested but the scan matched no files. The destination
    /// root is left untouched.
    #[error("no files matched the registered patterns; nothing to copy")]
    NothingToCopy,

    /// Directory creation or a file copy failed. Files copied before the
    /// failure remain in place.
    #[error("copy failed at {}: {}", .path.display(), .source)]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
