//! Sidecar artifact writes for enriched library folders.
//!
//! Writes the `details.json` metadata file and the `cover.jpg` image next to
//! a title's chapters. Both writes are idempotent: an artifact that already
//! exists is left untouched and reported as a skip, and their combined
//! presence is the authoritative already-processed marker for a folder.
//!
//! # Module structure note
//!
//! This module is intentionally a single file (`mod.rs`-only); the feature
//! scope is small enough to not warrant sub-files.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::metadata::MangaDetails;

/// Metadata artifact file name.
pub const DETAILS_FILE: &str = "details.json";

/// Cover artifact file name.
pub const COVER_FILE: &str = "cover.jpg";

/// Errors produced by sidecar writes.
#[derive(Debug, Error)]
pub enum SidecarError {
    /// I/O error writing an artifact to disk.
    #[error("I/O error writing sidecar artifact: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error (shouldn't occur for well-formed records).
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Returns whether both artifacts already exist under `dir`.
#[must_use]
pub fn is_complete(dir: &Path) -> bool {
    dir.join(DETAILS_FILE).exists() && dir.join(COVER_FILE).exists()
}

/// Writes `details.json` into `dir`, pretty-printed UTF-8.
///
/// Returns `Ok(None)` (with a `debug!` log) when the file already exists.
/// Returns `Some(path)` on a fresh write.
///
/// # Errors
///
/// Returns [`SidecarError`] on I/O or serialization failure.
#[instrument(skip(details), fields(dir = %dir.display()))]
pub fn write_details(dir: &Path, details: &MangaDetails) -> Result<Option<PathBuf>, SidecarError> {
    let path = dir.join(DETAILS_FILE);
    let Some(file) = open_new(&path)? else {
        return Ok(None);
    };

    let write_result = {
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, details)
    };
    if let Err(err) = write_result {
        // Best-effort cleanup so a partially written file does not block reruns.
        let _ = fs::remove_file(&path);
        return Err(err.into());
    }

    debug!(path = %path.display(), "Details written");
    Ok(Some(path))
}

/// Writes `cover.jpg` into `dir` with the given image bytes, verbatim.
///
/// Same contract as [`write_details`]: `Ok(None)` when the file already
/// exists, `Some(path)` on a fresh write.
///
/// # Errors
///
/// Returns [`SidecarError`] on I/O failure.
#[instrument(skip(bytes), fields(dir = %dir.display(), bytes = bytes.len()))]
pub fn write_cover(dir: &Path, bytes: &[u8]) -> Result<Option<PathBuf>, SidecarError> {
    let path = dir.join(COVER_FILE);
    let Some(mut file) = open_new(&path)? else {
        return Ok(None);
    };

    if let Err(err) = file.write_all(bytes) {
        let _ = fs::remove_file(&path);
        return Err(err.into());
    }

    debug!(path = %path.display(), "Cover written");
    Ok(Some(path))
}

/// Opens `path` for exclusive creation; `None` means it already exists.
fn open_new(path: &Path) -> Result<Option<fs::File>, SidecarError> {
    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "Artifact already exists, skipping");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
