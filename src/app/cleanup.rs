// codesweep - app/cleanup.rs
//
// Clean-up run orchestration: discovery once, then one sweep per file in
// listing order.
//
//   - Strictly sequential; each file is read fully before it is written.
//   - Fail-fast: the first discovery, marker or I/O error aborts the run.
//   - Files that need no rewrite are never written.

use crate::core::discovery::{self, DiscoveryConfig};
use crate::core::marker::{ExpiryPolicy, MarkerSet, Sweeper};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::CleanupError;
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Everything a clean-up run needs.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// Which files are candidates.
    pub discovery: DiscoveryConfig,
    /// Marker vocabulary.
    pub markers: MarkerSet,
    /// How start markers decide expiry.
    pub policy: ExpiryPolicy,
    /// Date expiry is judged against.
    pub today: NaiveDate,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(constants::DEFAULT_ROOT),
            discovery: DiscoveryConfig::default(),
            markers: MarkerSet::default(),
            policy: ExpiryPolicy::default(),
            today: chrono::Local::now().date_naive(),
        }
    }
}

impl CleanupConfig {
    pub fn sweeper(&self) -> Sweeper {
        Sweeper::new(self.markers.clone(), self.policy, self.today)
    }
}

// =============================================================================
// Reports
// =============================================================================

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// The file was overwritten.
    pub rewritten: bool,
    /// Expired blocks dropped (0 when only marker lines were stripped).
    pub blocks_removed: usize,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Candidate files returned by discovery.
    pub files_scanned: usize,
    /// Files that were rewritten, in processing order.
    pub files_cleaned: Vec<PathBuf>,
    /// Expired blocks removed across all files.
    pub blocks_removed: usize,
}

// =============================================================================
// Per-file
// =============================================================================

/// Remove expired clean-up blocks from the file at `path`.
///
/// The file is rewritten only when a start marker was stripped, a complete
/// start/end pair exists, and no block is left open at end of file.
pub fn remove_expired_blocks(
    path: &Path,
    sweeper: &Sweeper,
) -> Result<FileOutcome, CleanupError> {
    let snapshot = fs::read_file_lossy(path).map_err(|source| CleanupError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    let outcome = sweeper.sweep(&snapshot.text).map_err(|e| CleanupError::Marker {
        path: path.to_path_buf(),
        line_number: e.line_number,
        source: e.source,
    })?;

    if outcome.modified && !outcome.should_rewrite() {
        tracing::warn!(
            file = %path.display(),
            complete_pair = outcome.complete_pair,
            unclosed_block = outcome.unclosed_block,
            "Clean-up marker without a matching end marker; file left untouched"
        );
    }

    let rewritten = outcome.should_rewrite();
    if rewritten && !snapshot.lossless {
        return Err(CleanupError::Io {
            path: path.to_path_buf(),
            operation: "decode",
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                "file is not valid UTF-8 and cannot be rewritten without loss",
            ),
        });
    }
    if rewritten {
        fs::rewrite_in_place(path, &outcome.render()).map_err(|source| CleanupError::Io {
            path: path.to_path_buf(),
            operation: "write",
            source,
        })?;
        tracing::info!(
            file = %path.display(),
            blocks = outcome.blocks_removed,
            lines = outcome.lines_removed,
            "Cleaned"
        );
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        rewritten,
        blocks_removed: if rewritten { outcome.blocks_removed } else { 0 },
    })
}

// =============================================================================
// Whole run
// =============================================================================

/// Discover candidate files under `config.root` and clean each in turn.
///
/// `on_file_cleaned` is called once per rewritten file, on the caller's
/// thread, before the next file is processed.
pub fn run_cleanup<F>(
    config: &CleanupConfig,
    mut on_file_cleaned: F,
) -> Result<CleanupSummary, CleanupError>
where
    F: FnMut(&FileOutcome),
{
    let files = discovery::discover_files(&config.root, &config.discovery)?;
    let sweeper = config.sweeper();

    tracing::info!(
        root = %config.root.display(),
        files = files.len(),
        policy = ?config.policy,
        today = %config.today,
        "Clean-up starting"
    );

    let mut summary = CleanupSummary {
        files_scanned: files.len(),
        ..Default::default()
    };

    for file in &files {
        let outcome = remove_expired_blocks(file, &sweeper)?;
        if outcome.rewritten {
            on_file_cleaned(&outcome);
            summary.blocks_removed += outcome.blocks_removed;
            summary.files_cleaned.push(outcome.path);
        }
    }

    tracing::info!(
        scanned = summary.files_scanned,
        cleaned = summary.files_cleaned.len(),
        blocks = summary.blocks_removed,
        "Clean-up complete"
    );

    Ok(summary)
}

// =============================================================================
// Tests
// =============================================================================
