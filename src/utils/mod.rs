//! Utility functions for collection runs.
//!
//! ## Common Use Cases
//!
//! ### Creating a Copy Report
//!
//! ```no_run
//! use treegather::collector::CopySummary;
//! use treegather::utils::summary::create_copy_report;
//!
//! # fn example() -> anyhow::Result<()> {
//! let summary = CopySummary {
//!     files: vec!["a.txt".to_string()],
//!     bytes_copied: 5,
//! };
//!
//! let report = create_copy_report(
//!     "workstation01",
//!     "2024-01-01T12:00:00Z",
//!     "/data/src",
//!     "/data/out",
//!     &summary,
//! )?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

/// Copy run reporting
pub mod summary;
