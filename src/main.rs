// codesweep - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the clean-up and reporting the outcome
//
// Exit status is 0 on success and 1 on the first error of any kind.

use clap::Parser;
use codesweep::app::cleanup::{self, CleanupConfig};
use codesweep::core::discovery::DiscoveryConfig;
use codesweep::core::marker::{ExpiryPolicy, MarkerSet};
use codesweep::util::{self, constants};
use std::path::PathBuf;

/// codesweep - remove expired temporary code blocks.
///
/// Deletes every block between a `> Start clean up at YYYY-MM-DD` line and the
/// next `> End clean up` line once its date is reached, rewriting the file in
/// place.
#[derive(Parser, Debug)]
#[command(name = "codesweep", version, about)]
struct Cli {
    /// Directory to scan.
    #[arg(default_value = constants::DEFAULT_ROOT)]
    root: PathBuf,

    /// File-name suffix to scan, including the leading dot. Repeatable.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "SUFFIX",
        value_parser = parse_extension,
        default_values_t = default_extensions()
    )]
    extensions: Vec<String>,

    /// Additional directory name to skip (.git and .github are always skipped).
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    exclude: Vec<String>,

    /// Remove every marked block regardless of date.
    #[arg(long)]
    unconditional: bool,

    /// Judge expiry against this date instead of today (YYYY-MM-DD).
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    today: Option<chrono::NaiveDate>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    fn into_config(self) -> CleanupConfig {
        let mut discovery = DiscoveryConfig {
            extensions: self.extensions,
            ..Default::default()
        };
        discovery.excluded_dirs.extend(self.exclude);

        CleanupConfig {
            root: self.root,
            discovery,
            markers: MarkerSet::default(),
            policy: if self.unconditional {
                ExpiryPolicy::Unconditional
            } else {
                ExpiryPolicy::Dated
            },
            today: self
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        }
    }
}

fn default_extensions() -> Vec<String> {
    constants::DEFAULT_EXTENSIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn parse_extension(s: &str) -> Result<String, String> {
    if s.len() > 1 && s.starts_with('.') {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' must start with a dot, e.g. .go"))
    }
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(s, constants::DATE_FORMAT)
        .map_err(|e| format!("'{s}' is not a YYYY-MM-DD date: {e}"))
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        version = constants::APP_VERSION,
        args = ?cli,
        "codesweep starting"
    );

    let config = cli.into_config();

    let result = cleanup::run_cleanup(&config, |outcome| {
        println!("{} {}", constants::CLEANED_PREFIX, outcome.path.display());
    });

    match result {
        Ok(summary) => {
            tracing::debug!(
                scanned = summary.files_scanned,
                cleaned = summary.files_cleaned.len(),
                "Run finished"
            );
            println!("{}", constants::COMPLETE_MESSAGE);
        }
        Err(e) => {
            tracing::error!(error = %e, "Clean-up aborted");
            eprintln!("{} {e}", constants::ERROR_PREFIX);
            std::process::exit(1);
        }
    }
}
