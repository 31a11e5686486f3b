//! # treegather
//!
//! Glob-driven file collection with multi-repository git auto-push.
//!
//! ## Overview
//!
//! treegather scans a directory tree for regular files matching simple glob
//! patterns and copies the matches into a destination tree, recreating their
//! relative paths. A second mode sweeps the immediate subdirectories of a
//! parent folder and stages, commits, and pushes every git repository it
//! finds there.
//!
//! ## Features
//!
//! - **Glob matching**: `*` and `?` wildcards, case-insensitive, matched
//!   against both relative paths and bare filenames
//! - **Error isolation**: unreadable entries are logged and skipped instead
//!   of aborting the scan
//! - **Structure-preserving copy**: relative paths are recreated under the
//!   destination root, existing files are overwritten
//! - **Profiles**: YAML files describing source root, patterns, and
//!   destination
//! - **Auto-push sweep**: stage/commit/push across sibling repositories with
//!   per-repository status reporting
//!
//! ## Usage
//!
//! ### Collecting and Copying Files
//!
//! ```no_run
//! use treegather::collector::FileCollector;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut collector = FileCollector::new("/data/src");
//! collector.add_pattern("*.cpp");
//! collector.add_pattern("*.md");
//!
//! for path in collector.collect()? {
//!     println!("{}", path);
//! }
//!
//! let summary = collector.copy_to("/data/out")?;
//! println!("Copied {} files", summary.file_count());
//! # Ok(())
//! # }
//! ```
//!
//! ### Pushing Every Repository Under a Directory
//!
//! ```no_run
//! use std::path::Path;
//! use treegather::repos::{AutoPusher, SystemRunner};
//!
//! # fn main() -> anyhow::Result<()> {
//! let pusher = AutoPusher::new(&SystemRunner);
//! let report = pusher.push_all(Path::new("/work/projects"), "checkpoint")?;
//! println!("{} pushed, {} failed", report.pushed.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`collector`]: Pattern compilation, traversal, and copy execution
//! - [`config`]: Collection profile management
//! - [`repos`]: Repository discovery and the auto-push sweep
//! - [`utils`]: Copy run reporting
//! - [`errors`]: Typed errors for collect and copy operations
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Pattern-driven file collection and copying
pub mod collector;

/// Collection profile management
pub mod config;

/// Application constants
pub mod constants;

/// Typed errors for collect and copy operations
pub mod errors;

/// Repository discovery and the git auto-push sweep
pub mod repos;

/// Utility functions for reporting
pub mod utils;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
