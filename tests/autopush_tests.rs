//! Integration tests for the auto-push sweep against real git repositories.
//!
//! Each test builds throwaway repositories in temporary directories and, for
//! the push scenarios, a local bare repository standing in for the remote.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use tempfile::TempDir;

use treegather::repos::{find_repositories, AutoPusher, SystemRunner};

fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

fn git_stdout(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Initialize a working repository under `parent` that pushes to `remote`
fn init_repo(parent: &Path, name: &str, remote: Option<&Path>) -> Result<()> {
    let repo = parent.join(name);
    fs::create_dir_all(&repo)?;
    run_git(&repo, &["init", "."])?;
    run_git(&repo, &["config", "user.email", "dev@example.com"])?;
    run_git(&repo, &["config", "user.name", "Dev"])?;
    run_git(&repo, &["config", "commit.gpgsign", "false"])?;
    run_git(&repo, &["config", "push.default", "current"])?;
    if let Some(remote) = remote {
        run_git(
            &repo,
            &["remote", "add", "origin", &remote.to_string_lossy()],
        )?;
    }
    fs::write(repo.join("notes.txt"), format!("work in {}", name))?;
    Ok(())
}

/// Test that discovery sees exactly the repositories directly under the parent
#[test]
fn test_discovery_through_public_api() -> Result<()> {
    let parent = TempDir::new()?;
    init_repo(parent.path(), "tracked", None)?;
    fs::create_dir_all(parent.path().join("untracked"))?;

    let repos = find_repositories(parent.path())?;
    assert_eq!(repos.len(), 1);
    assert!(repos[0].ends_with("tracked"));

    Ok(())
}

/// Test a full sweep: stage, commit, and push into a local bare remote
#[test]
fn test_sweep_pushes_to_a_local_bare_remote() -> Result<()> {
    let parent = TempDir::new()?;
    let remote = TempDir::new()?;
    run_git(remote.path(), &["init", "--bare", "."])?;
    init_repo(parent.path(), "project", Some(remote.path()))?;

    let pusher = AutoPusher::new(&SystemRunner);
    let report = pusher.push_all(parent.path(), "premier dépôt")?;

    assert_eq!(report.pushed, vec!["project".to_string()]);
    assert!(report.failed.is_empty());

    // The bare remote received the commit, with the accent-folded message
    let log = git_stdout(remote.path(), &["log", "--all", "--oneline"])?;
    assert!(
        log.contains("premier depot"),
        "remote log should contain the folded message, got: {}",
        log
    );

    Ok(())
}

/// Test that a repository without a push destination fails without stopping
/// the sweep
#[test]
fn test_sweep_continues_past_a_repository_that_cannot_push() -> Result<()> {
    let parent = TempDir::new()?;
    let remote = TempDir::new()?;
    run_git(remote.path(), &["init", "--bare", "."])?;
    init_repo(parent.path(), "broken", None)?;
    init_repo(parent.path(), "working", Some(remote.path()))?;

    let pusher = AutoPusher::new(&SystemRunner);
    let report = pusher.push_all(parent.path(), "checkpoint")?;

    assert_eq!(report.failed, vec!["broken".to_string()]);
    assert_eq!(report.pushed, vec!["working".to_string()]);

    // The commit in the broken repository still happened; only the push failed
    let log = git_stdout(&parent.path().join("broken"), &["log", "--oneline"])?;
    assert!(log.contains("checkpoint"));

    Ok(())
}

/// Test that a parent without repositories yields an empty report
#[test]
fn test_sweep_over_empty_parent() -> Result<()> {
    let parent = TempDir::new()?;
    fs::create_dir_all(parent.path().join("just-a-dir"))?;

    let pusher = AutoPusher::new(&SystemRunner);
    let report = pusher.push_all(parent.path(), "checkpoint")?;

    assert_eq!(report.processed(), 0);

    Ok(())
}

/// Test that a missing parent directory fails the whole run
#[test]
fn test_sweep_with_missing_parent_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let pusher = AutoPusher::new(&SystemRunner);

    let result = pusher.push_all(&dir.path().join("gone"), "checkpoint");
    assert!(result.is_err());

    Ok(())
}
