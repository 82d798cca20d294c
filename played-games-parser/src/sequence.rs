//! Expansion of compact series notation in game names.
//!
//! A single line often lists several parts of a series:
//! ```text
//! Resident Evil 4, 5, 6
//! Resident Evil 1-3
//! Heroes of Might and Magic III, IV
//! ```
//! The expander turns each of these into one name per part. Part 1 of a
//! series is written without a number, so `"Resident Evil 1-3"` becomes
//! `["Resident Evil", "Resident Evil 2", "Resident Evil 3"]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SequenceError;

/// Comma lists of numbers, a numeric range, or comma lists of roman
/// numerals. At the leftmost match position the alternatives are tried in
/// this order.
pub const SEQUENCE_PATTERN: &str =
    r"(?i)([0-9]+(?:,\s*[0-9]+)+)|([0-9]+\s*-\s*[0-9]+)|([MDCLXVI]+(?:,\s*[MDCLXVI]+)+)";

/// Largest number of names a single range may expand to.
pub const MAX_RANGE_LEN: u32 = 1000;

/// Capture group of the numeric range alternative.
const RANGE_GROUP: usize = 2;

static DEFAULT_EXPANDER: LazyLock<SequenceExpander> = LazyLock::new(SequenceExpander::new);

/// Finds and expands the first sequence expression in a game name.
#[derive(Debug, Clone)]
pub struct SequenceExpander {
    pattern: Regex,
}

impl SequenceExpander {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SEQUENCE_PATTERN).expect("Invalid sequence regex"),
        }
    }

    /// Expand `name`, reporting ranges that cannot be expanded.
    ///
    /// Only the first sequence is honored. Text after it is dropped, so
    /// `"Trollface Quest 1-7-8"` yields `"Trollface Quest"` through
    /// `"Trollface Quest 7"`.
    pub fn try_expand(&self, name: &str) -> Result<Vec<String>, SequenceError> {
        let Some(caps) = self.pattern.captures(name) else {
            return Ok(vec![name.to_string()]);
        };
        let Some(found) = caps.get(0) else {
            return Ok(vec![name.to_string()]);
        };

        let base = name[..found.start()].trim();
        let token: String = found
            .as_str()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let parts = if caps.get(RANGE_GROUP).is_some() {
            expand_range(&token)?
        } else {
            token.split(',').map(str::to_string).collect()
        };

        Ok(parts
            .into_iter()
            .map(|part| {
                if part == "1" {
                    base.to_string()
                } else {
                    format!("{base} {part}")
                }
            })
            .collect())
    }

    /// Expand `name`, logging a warning and falling back to
    /// [`SequenceError::fallback`] when the sequence is malformed.
    pub fn expand(&self, name: &str) -> Vec<String> {
        self.try_expand(name).unwrap_or_else(|e| {
            log::warn!("Cannot expand \"{name}\": {e}");
            e.fallback(name)
        })
    }
}

impl Default for SequenceExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a game name with the shared default expander.
///
/// # Examples
///
/// ```
/// use played_games_parser::sequence::expand_game_name;
///
/// assert_eq!(
///     expand_game_name("Resident Evil 4, 5, 6"),
///     vec!["Resident Evil 4", "Resident Evil 5", "Resident Evil 6"],
/// );
/// assert_eq!(
///     expand_game_name("Resident Evil 1-3"),
///     vec!["Resident Evil", "Resident Evil 2", "Resident Evil 3"],
/// );
/// assert_eq!(expand_game_name("Final Fantasy VII"), vec!["Final Fantasy VII"]);
/// ```
pub fn expand_game_name(name: &str) -> Vec<String> {
    DEFAULT_EXPANDER.expand(name)
}

/// `"1-3"` -> `["1", "2", "3"]`
fn expand_range(token: &str) -> Result<Vec<String>, SequenceError> {
    let (lo, hi) = token
        .split_once('-')
        .ok_or_else(|| SequenceError::InvalidNumber(token.to_string()))?;
    let lo = parse_bound(lo)?;
    let hi = parse_bound(hi)?;

    if lo > hi {
        return Err(SequenceError::DescendingRange { lo, hi });
    }
    if hi - lo >= MAX_RANGE_LEN {
        return Err(SequenceError::RangeTooLong {
            lo,
            hi,
            max: MAX_RANGE_LEN,
        });
    }

    Ok((lo..=hi).map(|n| n.to_string()).collect())
}

fn parse_bound(s: &str) -> Result<u32, SequenceError> {
    s.parse()
        .map_err(|_| SequenceError::InvalidNumber(s.to_string()))
}
