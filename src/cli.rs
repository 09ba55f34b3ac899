//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Batch metadata enrichment for Mihon-style local manga libraries.
///
/// Mangafetch scans a directory of per-title folders, looks each title up
/// on MyAnimeList via the Jikan API, and writes a `details.json` plus a
/// `cover.jpg` into every folder that does not have them yet.
#[derive(Parser, Debug)]
#[command(name = "mangafetch")]
#[command(author, version, about)]
pub struct Args {
    /// Library root to scan (defaults to the directory containing the executable)
    pub root: Option<PathBuf>,

    /// Skip the interactive confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Minimum delay between provider requests in milliseconds (0 to disable, max 60000)
    #[arg(short = 'l', long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub rate_limit: u64,

    /// Additional directory names to exclude from the walk (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
