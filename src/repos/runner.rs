//! Command execution for repository operations.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use log::debug;

/// Executes an ordered command sequence inside a working directory.
///
/// Each command is an argv vector; no shell is involved.
pub trait CommandRunner {
    /// Run each command in order inside `workdir`, stopping at the first
    /// nonzero exit. Returns whether the whole sequence succeeded.
    ///
    /// `Err` means a command could not be launched at all; a command that
    /// ran and failed yields `Ok(false)`.
    fn run_sequence(&self, workdir: &Path, commands: &[Vec<String>]) -> Result<bool>;
}

/// Runs commands as child processes with inherited stdio, so their output
/// streams straight to the terminal.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_sequence(&self, workdir: &Path, commands: &[Vec<String>]) -> Result<bool> {
        for argv in commands {
            let (program, args) = argv
                .split_first()
                .context("Empty command in sequence")?;

            debug!("Running {:?} in {}", argv, workdir.display());
            let status = Command::new(program)
                .args(args)
                .current_dir(workdir)
                .status()
                .context(format!("Failed to execute {}", program))?;

            if !status.success() {
                debug!("Command {:?} exited with {}", argv, status);
                return Ok(false);
            }
        }

        Ok(true)
    }
}
