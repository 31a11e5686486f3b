//! The stage/commit/push sweep over discovered repositories.

use std::path::Path;

use anyhow::Result;
use log::warn;

use crate::repos::discovery::find_repositories;
use crate::repos::runner::CommandRunner;
use crate::repos::transliterate::fold_accents;

/// Outcome of one auto-push sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PushReport {
    /// Repositories whose full command sequence succeeded, by name.
    pub pushed: Vec<String>,
    /// Repositories where a command failed or could not be launched.
    pub failed: Vec<String>,
}

impl PushReport {
    /// Total number of repositories processed.
    pub fn processed(&self) -> usize {
        self.pushed.len() + self.failed.len()
    }
}

/// Stages, commits, and pushes every repository found directly under a
/// parent directory.
pub struct AutoPusher<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> AutoPusher<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        AutoPusher { runner }
    }

    /// The fixed command sequence run inside each repository.
    fn push_sequence(message: &str) -> Vec<Vec<String>> {
        vec![
            vec!["git".to_string(), "add".to_string(), ".".to_string()],
            vec![
                "git".to_string(),
                "commit".to_string(),
                "-m".to_string(),
                message.to_string(),
            ],
            vec!["git".to_string(), "push".to_string()],
        ]
    }

    /// Sweep `parent` and push each repository with `commit_message`.
    ///
    /// The message has accents folded out before it reaches git. A failing
    /// repository is reported and the sweep moves on to the next one; only
    /// an unreadable parent directory fails the whole run.
    pub fn push_all(&self, parent: &Path, commit_message: &str) -> Result<PushReport> {
        let message = fold_accents(commit_message);
        let commands = Self::push_sequence(&message);

        let mut report = PushReport::default();
        for repo in find_repositories(parent)? {
            let name = repo
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| repo.display().to_string());
            println!("Processing repository: {}", name);

            let pushed = match self.runner.run_sequence(&repo, &commands) {
                Ok(success) => success,
                Err(e) => {
                    warn!("Could not run commands in {}: {}", repo.display(), e);
                    false
                }
            };

            if pushed {
                println!("✓ Pushed {}\n", name);
                report.pushed.push(name);
            } else {
                println!("⚠️  Push failed for {}\n", name);
                report.failed.push(name);
            }
        }

        if report.processed() == 0 {
            println!("No repositories found in {}", parent.display());
        } else {
            println!(
                "Processed {} repositories, {} failed",
                report.processed(),
                report.failed.len()
            );
        }

        Ok(report)
    }
}
