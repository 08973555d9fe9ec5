// codesweep - util/constants.rs
//
// Single source of truth for all named constants and defaults.
// There is no configuration file; anything tunable is a CLI flag whose
// default lives here.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "codesweep";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Discovery defaults
// =============================================================================

/// Root directory scanned when none is given on the command line.
pub const DEFAULT_ROOT: &str = ".";

/// File-name suffixes scanned by default. Suffixes include the leading dot.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".go"];

/// Directory names that are never descended into: version-control metadata
/// and CI configuration.
pub const EXCLUDED_DIRS: &[&str] = &[".git", ".github"];

// =============================================================================
// Marker vocabulary
// =============================================================================

/// Substring that opens a clean-up block.
pub const START_MARKER: &str = "> Start clean up";

/// Substring that closes a clean-up block.
pub const END_MARKER: &str = "> End clean up";

/// Whole-word prepositions that introduce the expiry date on a start line,
/// in lookup order.
pub const DATE_PREPOSITIONS: &[&str] = &["at", "on"];

/// `chrono` format of the expiry date (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Console output
// =============================================================================

/// Prefix printed before each rewritten file path.
pub const CLEANED_PREFIX: &str = "✅ Cleaned:";

/// Prefix printed before a fatal error message.
pub const ERROR_PREFIX: &str = "❌ Error:";

/// Printed once after a successful run.
pub const COMPLETE_MESSAGE: &str = "🚀 Cleanup complete!";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept quiet so CI output is just the console lines above.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
