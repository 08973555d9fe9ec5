// codesweep - core/remover.rs
//
// Single forward pass over a file snapshot that drops expired clean-up
// blocks and their marker lines.
// Core layer: takes file content as `&str`; reading and writing the file is
// owned by the app layer (app::cleanup).
//
// Blocks do not nest. A start seen while a block is open keeps the block
// open; the next end closes it.

use crate::core::marker::{MarkerKind, Sweeper};
use crate::util::error::MarkerError;

/// Result of sweeping one file snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Lines that survive, without line terminators.
    pub kept: Vec<String>,

    /// At least one start marker line was dropped.
    pub modified: bool,

    /// A start marker was later closed by an end marker.
    pub complete_pair: bool,

    /// The file ended while a block was still open.
    pub unclosed_block: bool,

    /// Number of expired blocks whose content was dropped.
    pub blocks_removed: usize,

    /// Number of guarded lines dropped along with those blocks.
    pub lines_removed: usize,
}

impl SweepOutcome {
    /// Whether the file should be rewritten with `render()`.
    ///
    /// An unclosed start anywhere in the file suppresses the rewrite, so a
    /// missing end marker can never truncate the rest of the file.
    pub fn should_rewrite(&self) -> bool {
        self.modified && self.complete_pair && !self.unclosed_block
    }

    /// Kept lines joined with `\n`, plus a single trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.kept.join("\n");
        out.push('\n');
        out
    }
}

/// A marker error together with the 1-based line it occurred on.
#[derive(Debug)]
pub struct SweepLineError {
    pub line_number: usize,
    pub source: MarkerError,
}

impl Sweeper {
    /// Sweep `content`, returning what to keep and whether to rewrite.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. Marker lines are always
    /// stripped once their block is accounted for; only the guarded content
    /// depends on expiry. An end marker with no open block is dropped too, but
    /// never counts towards a complete pair.
    pub fn sweep(&self, content: &str) -> Result<SweepOutcome, SweepLineError> {
        let mut outcome = SweepOutcome::default();
        let mut inside_expired = false;
        let mut open_block = false;

        for (idx, line) in content.lines().enumerate() {
            match self.markers.classify(line) {
                MarkerKind::Start => {
                    let expired = self.is_expired(line).map_err(|source| SweepLineError {
                        line_number: idx + 1,
                        source,
                    })?;
                    if expired && !inside_expired {
                        outcome.blocks_removed += 1;
                        inside_expired = true;
                    }
                    outcome.modified = true;
                    open_block = true;
                }
                MarkerKind::End => {
                    // An end with no open block is dropped but changes no state.
                    if open_block {
                        outcome.complete_pair = true;
                        inside_expired = false;
                        open_block = false;
                    }
                }
                MarkerKind::Plain => {
                    if inside_expired {
                        outcome.lines_removed += 1;
                    } else {
                        outcome.kept.push(line.to_string());
                    }
                }
            }
        }

        outcome.unclosed_block = open_block;
        Ok(outcome)
    }
}

// =============================================================================
// Tests
// =============================================================================
