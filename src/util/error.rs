// codesweep - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error carries the path (and line, where relevant) that caused it so
// the single fatal message printed by the CLI is actionable on its own.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a clean-up run.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CleanupError {
    /// File discovery failed.
    Discovery(DiscoveryError),

    /// A start marker in a file could not be evaluated.
    Marker {
        path: PathBuf,
        line_number: usize,
        source: MarkerError,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovery(e) => write!(f, "Discovery error: {e}"),
            Self::Marker {
                path,
                line_number,
                source,
            } => write!(f, "'{}' line {line_number}: {source}", path.display()),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CleanupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Discovery(e) => Some(e),
            Self::Marker { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Errors related to file discovery.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The root scan path does not exist.
    RootNotFound { path: PathBuf },

    /// The root scan path exists or may exist but could not be inspected
    /// (e.g. a parent component is a file, or a symlink loop).
    Inaccessible { path: PathBuf, source: io::Error },

    /// The root path is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied accessing the root path.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Walkdir traversal error (an entry below the root could not be read).
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "Scan path '{}' does not exist", path.display())
            }
            Self::Inaccessible { path, source } => {
                write!(f, "Cannot access scan path '{}': {source}", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Scan path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
            Self::Traversal { path, source } => {
                write!(f, "Error traversing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } | Self::Inaccessible { source, .. } => {
                Some(source)
            }
            Self::Traversal { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DiscoveryError> for CleanupError {
    fn from(e: DiscoveryError) -> Self {
        Self::Discovery(e)
    }
}

// ---------------------------------------------------------------------------
// Marker errors
// ---------------------------------------------------------------------------

/// Errors raised while reading the expiry date off a start marker line.
#[derive(Debug)]
pub enum MarkerError {
    /// Neither date preposition appears as a word on the start line.
    MissingPreposition { line: String },

    /// The text after the preposition is not a `YYYY-MM-DD` date.
    InvalidDate {
        line: String,
        raw_date: String,
        source: chrono::ParseError,
    },

    /// The date parses but is not spelled as zero-padded `YYYY-MM-DD`
    /// (e.g. `2024-1-5` or `+2024-01-05`).
    NonCanonicalDate { line: String, raw_date: String },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPreposition { line } => write!(
                f,
                "please use \"at\" or \"on\" to specify the time (in '{}')",
                line.trim()
            ),
            Self::InvalidDate {
                line,
                raw_date,
                source,
            } => write!(
                f,
                "cannot parse expiry date '{raw_date}' as YYYY-MM-DD in '{}': {source}",
                line.trim()
            ),
            Self::NonCanonicalDate { line, raw_date } => write!(
                f,
                "expiry date '{raw_date}' must be written as YYYY-MM-DD in '{}'",
                line.trim()
            ),
        }
    }
}

impl std::error::Error for MarkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::MissingPreposition { .. } | Self::NonCanonicalDate { .. } => None,
        }
    }
}
