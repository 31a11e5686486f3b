//! Global constants for the treegather application.
//!
//! This module centralizes hardcoded values so behavior changes happen in
//! one place.

// Repository discovery constants
/// Marker entry identifying a directory as a git repository. May be a
/// directory or, for worktrees and submodule checkouts, a plain file.
pub const REPO_MARKER: &str = ".git";

// Configuration constants
/// Default collection profile filename, used when no path is given.
pub const DEFAULT_PROFILE_FILE: &str = "collection.yaml";

/// Profile format version written into new profiles.
pub const PROFILE_VERSION: &str = "1.0";
