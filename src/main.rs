use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use treegather::cli::{Args, AutopushOpts, Commands, CopyOpts, ScanOpts};
use treegather::collector::{CopySummary, FileCollector};
use treegather::config::{load_or_create_config, CollectionProfile};
use treegather::repos::transliterate::fold_accents;
use treegather::repos::{AutoPusher, SystemRunner};
use treegather::utils::summary;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    match &args.command {
        Commands::Collect(opts) => handle_collect(opts),
        Commands::Copy(opts) => handle_copy(opts),
        Commands::Autopush(opts) => handle_autopush(opts),
        Commands::InitConfig { path } => handle_init_config(path),
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Build a collector from profile values and command-line overrides
fn build_collector(opts: &ScanOpts) -> Result<(FileCollector, CollectionProfile)> {
    let profile = load_or_create_config(opts.config.as_deref())?;
    let root = opts
        .root
        .clone()
        .unwrap_or_else(|| profile.source_root.clone());

    let mut collector = FileCollector::new(root);
    for pattern in profile.patterns.iter().chain(opts.patterns.iter()) {
        collector.add_pattern(pattern.clone());
    }

    Ok((collector, profile))
}

/// List matching files on standard output
fn handle_collect(opts: &ScanOpts) -> Result<()> {
    let (collector, _) = build_collector(opts)?;

    let files = collector.collect()?;
    for path in &files {
        println!("{}", path);
    }

    info!(
        "Matched {} files under {}",
        files.len(),
        collector.source_root().display()
    );
    Ok(())
}

/// Copy matching files into the destination tree
fn handle_copy(opts: &CopyOpts) -> Result<()> {
    let (collector, profile) = build_collector(&opts.scan)?;
    let dest = opts
        .dest
        .clone()
        .or(profile.destination)
        .ok_or_else(|| anyhow!("No destination given; use --dest or set one in the profile"))?;

    let copy_summary = collector.copy_to(&dest)?;
    info!(
        "Copied {} files ({} bytes) to {}",
        copy_summary.file_count(),
        copy_summary.bytes_copied,
        dest.display()
    );

    if let Some(report_path) = &opts.summary {
        write_copy_report(&collector, &dest, &copy_summary, report_path)?;
    }

    Ok(())
}

/// Write the JSON report of a completed copy run
fn write_copy_report(
    collector: &FileCollector,
    dest: &Path,
    copy_summary: &CopySummary,
    report_path: &Path,
) -> Result<()> {
    let hostname = hostname::get()
        .map_err(|e| anyhow!("Failed to get hostname: {}", e))?
        .to_string_lossy()
        .to_string();
    let timestamp = chrono::Utc::now().to_rfc3339();

    let report = summary::create_copy_report(
        &hostname,
        &timestamp,
        &collector.source_root().to_string_lossy(),
        &dest.to_string_lossy(),
        copy_summary,
    )?;

    fs::write(report_path, report)
        .context(format!("Failed to write report to {}", report_path.display()))?;
    info!("Copy report written to {}", report_path.display());
    Ok(())
}

/// Stage, commit, and push every repository under the parent directory
fn handle_autopush(opts: &AutopushOpts) -> Result<()> {
    let parent = match &opts.path {
        Some(path) => path.clone(),
        None => PathBuf::from(fold_accents(&prompt("Parent directory path: ")?)),
    };
    if !parent.exists() {
        return Err(anyhow!(
            "Parent directory does not exist: {}",
            parent.display()
        ));
    }

    let message = match &opts.message {
        Some(message) => message.clone(),
        None => prompt("Commit message: ")?,
    };

    println!("Searching for repositories in: {}\n", parent.display());
    let pusher = AutoPusher::new(&SystemRunner);
    pusher.push_all(&parent, &message)?;
    Ok(())
}

/// Create a starter profile file
fn handle_init_config(path: &Path) -> Result<()> {
    info!("Creating starter profile at {}", path.display());
    let profile = CollectionProfile::default();
    profile.save_to_yaml_file(path)?;
    info!("Profile created successfully");
    Ok(())
}

/// Print `label` and read one trimmed line from standard input
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    Ok(line.trim().to_string())
}
