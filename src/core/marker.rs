// codesweep - core/marker.rs
//
// Line classification and expiry evaluation for clean-up markers.
// Core layer: operates on `&str` lines only, never touches the filesystem.
//
// Matching is plain substring containment, so a marker may sit inside any
// comment syntax (`// > Start clean up at 2024-05-01`, `<!-- > End clean up -->`).

use crate::util::constants;
use crate::util::error::MarkerError;
use chrono::NaiveDate;

// =============================================================================
// Marker vocabulary
// =============================================================================

/// Classification of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Opens a clean-up block.
    Start,
    /// Closes a clean-up block.
    End,
    /// Any other line.
    Plain,
}

/// The marker strings recognised in a run.
///
/// Injected rather than read from globals so alternate vocabularies can be
/// exercised in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    /// Substring identifying a start line.
    pub start: String,
    /// Substring identifying an end line.
    pub end: String,
    /// Whole-word prepositions that introduce the expiry date, in lookup order.
    pub prepositions: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            start: constants::START_MARKER.to_string(),
            end: constants::END_MARKER.to_string(),
            prepositions: constants::DATE_PREPOSITIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl MarkerSet {
    /// Classify `line`. A line containing both literals counts as a start.
    pub fn classify(&self, line: &str) -> MarkerKind {
        if line.contains(&self.start) {
            MarkerKind::Start
        } else if line.contains(&self.end) {
            MarkerKind::End
        } else {
            MarkerKind::Plain
        }
    }

    /// The first preposition (in vocabulary order) present as a whole word.
    fn find_preposition(&self, line: &str) -> Option<&str> {
        self.prepositions
            .iter()
            .map(String::as_str)
            .find(|p| line.split_whitespace().any(|word| word == *p))
    }

    /// Read the expiry date off a dated start line.
    ///
    /// The date is whatever follows the *last* textual occurrence of the
    /// preposition, trimmed, so `> Start clean up at 2024-05-01` and
    /// `// > Start clean up on 2024-05-01 ` both yield 2024-05-01. Only the
    /// zero-padded `YYYY-MM-DD` spelling is accepted.
    pub fn expiry_date(&self, line: &str) -> Result<NaiveDate, MarkerError> {
        let preposition = self.find_preposition(line).ok_or_else(|| {
            MarkerError::MissingPreposition {
                line: line.to_string(),
            }
        })?;

        let raw_date = line.rsplit(preposition).next().unwrap_or_default().trim();

        let date = NaiveDate::parse_from_str(raw_date, constants::DATE_FORMAT).map_err(
            |source| MarkerError::InvalidDate {
                line: line.to_string(),
                raw_date: raw_date.to_string(),
                source,
            },
        )?;

        // chrono accepts unpadded fields and a leading sign.
        if !is_iso_date_shape(raw_date) {
            return Err(MarkerError::NonCanonicalDate {
                line: line.to_string(),
                raw_date: raw_date.to_string(),
            });
        }

        Ok(date)
    }
}

/// `true` for exactly ten bytes shaped `DDDD-DD-DD`.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

// =============================================================================
// Expiry policy
// =============================================================================

/// How start markers decide whether their block has expired.
///
/// Exactly one policy applies to a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    /// Start lines carry `at|on YYYY-MM-DD`; the block expires on that day.
    #[default]
    Dated,
    /// Every block is removed on the next run; no date is read.
    Unconditional,
}

/// A marker vocabulary, an expiry policy and the date "now" is judged against.
#[derive(Debug, Clone)]
pub struct Sweeper {
    pub markers: MarkerSet,
    pub policy: ExpiryPolicy,
    pub today: NaiveDate,
}

impl Sweeper {
    pub fn new(markers: MarkerSet, policy: ExpiryPolicy, today: NaiveDate) -> Self {
        Self {
            markers,
            policy,
            today,
        }
    }

    /// Whether the block opened by start line `line` has expired.
    ///
    /// A block expires at the start of its date: a date equal to `today` is
    /// expired, a future date is not.
    pub fn is_expired(&self, line: &str) -> Result<bool, MarkerError> {
        match self.policy {
            ExpiryPolicy::Unconditional => Ok(true),
            ExpiryPolicy::Dated => {
                let date = self.markers.expiry_date(line)?;
                Ok(self.today >= date)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
