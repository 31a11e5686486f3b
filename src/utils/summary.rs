use anyhow::{Context, Result};
use serde_json::json;
use uuid::Uuid;

use crate::collector::CopySummary;

/// Create a JSON report of a copy run.
///
/// # Arguments
///
/// * `hostname` - The hostname of the machine the copy ran on
/// * `timestamp` - ISO 8601 formatted timestamp of when the run started
/// * `source_root` - The scanned directory
/// * `destination` - The destination root files were copied under
/// * `summary` - Counters and file list from the completed run
///
/// # Returns
///
/// * `Ok(String)` - JSON formatted report as a string
/// * `Err` - If JSON serialization fails
///
/// # Example Output
///
/// ```json
/// {
///   "run_id": "550e8400-e29b-41d4-a716-446655440000",
///   "hostname": "workstation-01",
///   "run_time": "2024-01-15T14:30:52Z",
///   "source_root": "/data/src",
///   "destination": "/data/out",
///   "file_count": 3,
///   "bytes_copied": 2048,
///   "files": ["a.txt", "sub/b.cpp"]
/// }
/// ```
pub fn create_copy_report(
    hostname: &str,
    timestamp: &str,
    source_root: &str,
    destination: &str,
    summary: &CopySummary,
) -> Result<String> {
    let report = json!({
        "run_id": Uuid::new_v4().to_string(),
        "hostname": hostname,
        "run_time": timestamp,
        "os": std::env::consts::OS,
        "tool_version": env!("CARGO_PKG_VERSION"),
        "source_root": source_root,
        "destination": destination,
        "file_count": summary.file_count(),
        "bytes_copied": summary.bytes_copied,
        "files": &summary.files,
    });

    serde_json::to_string_pretty(&report).context("Failed to serialize copy report to JSON")
}
