// codesweep - core/discovery.rs
//
// Recursive directory traversal and candidate file discovery.
//
// Architecture note: this module uses `walkdir` for directory traversal as an
// OS abstraction. It reads only directory entries, never file contents --
// that boundary is owned by the app layer (app::cleanup).
//
//   - Entries are sorted by file name at every level, so the result order is
//     depth-first and lexicographic and identical between runs.
//   - Excluded directory names short-circuit descent via filter_entry, so
//     .git/ and .github/ subtrees are never traversed at all.
//   - Any traversal error is fatal: a partial file list is never returned.

use crate::util::error::DiscoveryError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a discovery operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// File-name suffixes (including the leading dot) a file must end with.
    /// Matching is exact and case-sensitive. An empty list matches nothing.
    pub extensions: Vec<String>,

    /// Entry names that are skipped; matching directories are not descended
    /// into.
    pub excluded_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            extensions: constants::DEFAULT_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            excluded_dirs: constants::EXCLUDED_DIRS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Discovery
// =============================================================================

/// Discover files under `root` whose names end with one of the configured
/// extensions.
///
/// Returned paths are `root` joined with the path relative to it, so a
/// relative root yields relative paths.
///
/// # Errors
/// `RootNotFound`, `NotADirectory`, `PermissionDenied` or `Inaccessible` if
/// `root` is not a readable directory; `Traversal` if any entry below it cannot be read.
pub fn discover_files(
    root: &Path,
    config: &DiscoveryConfig,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    // --- Pre-flight validation ---
    // `fs::metadata()` rather than `Path::is_dir()` so that PermissionDenied
    // is distinguishable from a path that does not exist.
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(DiscoveryError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(DiscoveryError::PermissionDenied {
                path: root.to_path_buf(),
                source: e,
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DiscoveryError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(DiscoveryError::Inaccessible {
                path: root.to_path_buf(),
                source: e,
            });
        }
    }

    tracing::debug!(
        root = %root.display(),
        extensions = ?config.extensions,
        excluded = ?config.excluded_dirs,
        "Discovery starting"
    );

    let walker = walkdir::WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Always allow the root itself, even if it is named ".git".
            if e.depth() == 0 {
                return true;
            }
            !is_excluded_name(e.file_name(), &config.excluded_dirs)
        });

    let mut files: Vec<PathBuf> = Vec::new();

    for entry_result in walker {
        let entry = entry_result.map_err(|source| DiscoveryError::Traversal {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        // Directories are descended into, never returned.
        if entry.file_type().is_dir() {
            continue;
        }

        // Matched on raw bytes so non-UTF-8 names are still candidates.
        if !has_extension(entry.file_name(), &config.extensions) {
            tracing::trace!(file = %entry.path().display(), "Not matched by extensions");
            continue;
        }

        files.push(entry.into_path());
    }

    tracing::debug!(files = files.len(), "Discovery complete");

    Ok(files)
}

/// Returns true if `name` is one of the excluded entry names.
fn is_excluded_name(name: &OsStr, excluded: &[String]) -> bool {
    excluded.iter().any(|x| name == OsStr::new(x))
}

/// Returns true if `file_name` ends with at least one of `extensions`.
pub fn has_extension(file_name: &OsStr, extensions: &[String]) -> bool {
    let name = file_name.as_encoded_bytes();
    extensions.iter().any(|ext| name.ends_with(ext.as_bytes()))
}

// =============================================================================
// Tests
// =============================================================================
