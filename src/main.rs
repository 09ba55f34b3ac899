//! CLI entry point for the mangafetch tool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mangafetch_core::{CoverClient, JikanClient, LibraryWalker, RequestPacer, RunSummary};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let root = resolve_root(args.root.clone()).context("cannot determine library root")?;

    print_banner(&root);
    if !args.yes && !confirm()? {
        println!("Aborted.");
        return Ok(());
    }

    let provider = JikanClient::new();
    let covers = CoverClient::new();
    let pacer = if args.rate_limit == 0 {
        debug!("request pacing disabled");
        RequestPacer::disabled()
    } else {
        debug!(rate_limit_ms = args.rate_limit, "request pacing enabled");
        RequestPacer::new(Duration::from_millis(args.rate_limit))
    };

    let walker = LibraryWalker::new(root, &args.exclude);
    let summary = walker
        .process_all(&provider, &covers, &pacer)
        .await
        .context("library walk could not start")?;

    info!(
        processed = summary.processed(),
        failed = summary.failed(),
        skipped = summary.skipped(),
        total = summary.total(),
        "Run complete"
    );
    print_summary(&summary);

    Ok(())
}

/// Resolves the library root: explicit argument, else the directory that
/// contains the running executable.
fn resolve_root(arg: Option<PathBuf>) -> io::Result<PathBuf> {
    match arg {
        Some(root) => Ok(root),
        None => {
            let exe = std::env::current_exe()?;
            Ok(exe
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
        }
    }
}

fn print_banner(root: &Path) {
    println!("{:=<60}", "");
    println!("Manga Metadata Fetcher for Mihon");
    println!("{:=<60}", "");
    println!("Library root: {}", root.display());
    println!("Data source: Jikan API (MyAnimeList)");
    println!("{:=<60}", "");
    println!();
}

/// Asks for confirmation on stdin. Accepts `y` or `yes`, case-insensitive;
/// anything else (including EOF) cancels.
fn confirm() -> io::Result<bool> {
    print!("Do you want to proceed? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("{:=<60}", "");
    println!("SUMMARY");
    println!("{:=<60}", "");
    println!("Total directories: {}", summary.total());
    println!("Successfully processed: {}", summary.processed());
    println!("Failed: {}", summary.failed());
    println!("Skipped: {}", summary.skipped());
    println!("{:=<60}", "");
}
