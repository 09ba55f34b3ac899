//! Library walk orchestration: enumerate title folders, enrich each one.
//!
//! The walk is strictly sequential. Each entry runs through a small
//! pipeline - reserved-name skip, already-complete skip, search, match,
//! map, write, cover - and every per-entry failure is contained: it is
//! logged, counted, and the walk moves on. The only fatal error is an
//! unreadable root.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::cover::{self, CoverClient};
use crate::matcher::{self, MatchKind};
use crate::metadata::MangaDetails;
use crate::pacer::RequestPacer;
use crate::provider::SearchProvider;
use crate::sidecar::{self, SidecarError};

/// Folder names that are never library entries (tooling that lives next to
/// the titles).
pub const RESERVED_DIRS: [&str; 2] = ["free maga downloader 2", "Kindle Comic Converter"];

/// Fatal errors raised while enumerating the library root.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The root directory could not be listed.
    #[error("cannot read library root {path}: {source}")]
    ReadRoot {
        /// The root that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// Terminal state of one library entry after a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Name is in the exclusion set; never searched, never written to.
    SkippedReserved,
    /// Both artifacts already present; no network calls made.
    SkippedComplete,
    /// The provider had nothing usable for this entry.
    NotFound,
    /// Metadata (and cover, when one was available) written.
    Written,
}

/// Aggregate counters for a completed walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    processed: usize,
    failed: usize,
    skipped: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::SkippedReserved => self.skipped += 1,
            EntryOutcome::SkippedComplete | EntryOutcome::Written => self.processed += 1,
            EntryOutcome::NotFound => self.failed += 1,
        }
    }

    fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Entries enriched in this run or found already complete.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Entries with no usable metadata or a failed write.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Reserved entries excluded from the walk.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Total entries visited.
    #[must_use]
    pub fn total(&self) -> usize {
        self.processed + self.failed + self.skipped
    }
}

/// Walks a library root and enriches each title folder.
#[derive(Debug)]
pub struct LibraryWalker {
    root: PathBuf,
    excluded: Vec<String>,
}

impl LibraryWalker {
    /// Creates a walker over `root` excluding the reserved names plus any
    /// extra exclusions from configuration.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extra_exclusions: &[String]) -> Self {
        let mut excluded: Vec<String> = RESERVED_DIRS.iter().map(ToString::to_string).collect();
        excluded.extend(extra_exclusions.iter().cloned());
        Self {
            root: root.into(),
            excluded,
        }
    }

    /// The library root being walked.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerates the immediate child directories of the root, sorted by
    /// name so reruns process entries in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::ReadRoot`] when the root cannot be listed.
    pub fn scan_entries(&self) -> Result<Vec<PathBuf>, LibraryError> {
        let read_dir = fs::read_dir(&self.root).map_err(|source| LibraryError::ReadRoot {
            path: self.root.clone(),
            source,
        })?;

        let mut entries: Vec<PathBuf> = read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        entries.sort();
        Ok(entries)
    }

    /// Processes every entry in order, containing per-entry failures.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] only when the root itself cannot be read;
    /// everything after that is counted, never propagated.
    pub async fn process_all(
        &self,
        provider: &dyn SearchProvider,
        covers: &CoverClient,
        pacer: &RequestPacer,
    ) -> Result<RunSummary, LibraryError> {
        let entries = self.scan_entries()?;
        info!(
            entries = entries.len(),
            root = %self.root.display(),
            provider = provider.name(),
            "Starting library walk"
        );

        let mut summary = RunSummary::default();
        for dir in &entries {
            match self.process_entry(dir, provider, covers, pacer).await {
                Ok(outcome) => {
                    debug!(entry = %entry_name(dir), ?outcome, "Entry finished");
                    summary.record(outcome);
                }
                Err(err) => {
                    error!(entry = %entry_name(dir), error = %err, "Entry failed");
                    summary.record_failure();
                }
            }
        }

        info!(
            processed = summary.processed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "Library walk finished"
        );
        Ok(summary)
    }

    /// Runs one entry through the skip/search/match/write pipeline.
    #[instrument(skip_all, fields(entry = %entry_name(dir)))]
    async fn process_entry(
        &self,
        dir: &Path,
        provider: &dyn SearchProvider,
        covers: &CoverClient,
        pacer: &RequestPacer,
    ) -> Result<EntryOutcome, SidecarError> {
        let name = entry_name(dir);

        if self.excluded.iter().any(|excluded| excluded == name.as_ref()) {
            info!("Skipping excluded directory");
            return Ok(EntryOutcome::SkippedReserved);
        }

        if sidecar::is_complete(dir) {
            info!("Metadata already exists, skipping");
            return Ok(EntryOutcome::SkippedComplete);
        }

        pacer.acquire().await;
        let candidates = match provider.search(&name).await {
            Ok(candidates) => candidates,
            Err(err) => {
                // Provider failures degrade to "no result" for this entry;
                // the walk continues.
                warn!(error = %err, "Search failed");
                return Ok(EntryOutcome::NotFound);
            }
        };

        let Some(best) = matcher::select_best(&name, &candidates) else {
            warn!("No metadata found");
            return Ok(EntryOutcome::NotFound);
        };
        match best.kind {
            MatchKind::Exact => {
                debug!(title = ?best.manga.title, mal_id = ?best.manga.mal_id, "Exact title match");
            }
            MatchKind::Fuzzy(score) => {
                debug!(
                    title = ?best.manga.title,
                    mal_id = ?best.manga.mal_id,
                    score,
                    "Fuzzy title match"
                );
            }
            MatchKind::Fallback => {
                warn!(
                    title = ?best.manga.title,
                    mal_id = ?best.manga.mal_id,
                    "No title match, using most popular result"
                );
            }
        }

        let details = MangaDetails::from_manga(best.manga);
        sidecar::write_details(dir, &details)?;

        if dir.join(sidecar::COVER_FILE).exists() {
            debug!("Cover already exists, skipping download");
        } else if let Some(url) = cover::resolve_cover_url(best.manga) {
            pacer.acquire().await;
            match covers.download(url).await {
                Ok(bytes) => {
                    sidecar::write_cover(dir, &bytes)?;
                }
                // A failed download skips only the cover step.
                Err(err) => warn!(error = %err, "Cover download failed"),
            }
        } else {
            warn!("No cover image URL available");
        }

        Ok(EntryOutcome::Written)
    }
}

/// The entry's folder name, used verbatim as the search query.
fn entry_name(dir: &Path) -> Cow<'_, str> {
    dir.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
}
