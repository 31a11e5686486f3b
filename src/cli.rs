use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_PROFILE_FILE;

/// Command-line arguments for the treegather tool.
#[derive(Parser, Debug)]
#[clap(
    name = "treegather",
    about = "Glob-driven file collection with multi-repository git auto-push"
)]
pub struct Args {
    /// Verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files matching the configured patterns
    Collect(ScanOpts),

    /// Copy matching files into a destination tree
    Copy(CopyOpts),

    /// Stage, commit, and push every repository under a parent directory
    Autopush(AutopushOpts),

    /// Create a starter collection profile
    InitConfig {
        /// Path to the profile file to write
        #[clap(default_value = DEFAULT_PROFILE_FILE)]
        path: PathBuf,
    },
}

/// Options shared by the scanning subcommands.
#[derive(ClapArgs, Debug)]
pub struct ScanOpts {
    /// Directory to scan (overrides the profile)
    #[clap(short, long)]
    pub root: Option<PathBuf>,

    /// Glob pattern to match; repeatable, appended after profile patterns
    #[clap(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Path to a collection profile YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
}

/// Options for the copy subcommand.
#[derive(ClapArgs, Debug)]
pub struct CopyOpts {
    #[clap(flatten)]
    pub scan: ScanOpts,

    /// Destination root (overrides the profile)
    #[clap(short, long)]
    pub dest: Option<PathBuf>,

    /// Write a JSON report of the copy run to this path
    #[clap(long)]
    pub summary: Option<PathBuf>,
}

/// Options for the autopush subcommand.
#[derive(ClapArgs, Debug)]
pub struct AutopushOpts {
    /// Parent directory holding the repositories (prompted for when absent)
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// Commit message (prompted for when absent)
    #[clap(short, long)]
    pub message: Option<String>,
}
