//! Classification of single lines of a games list.
//!
//! ```text
//! PC:                  <- platform header
//!   Portal             <- "  " finished game
//! - Half-Life          <- "- " / " -" not finished
//! @ Celeste            <- "@ " / " @" watched
//! @-Dota 2             <- "@-" / "-@" not finished watching
//! ```

use played_games_core::CategoryKind;

/// What a line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Name:` starting a new platform section.
    Header { platform: &'a str },
    /// A game line. `kind` is `None` when the marker is not in the table.
    Entry {
        marker: &'a str,
        kind: Option<CategoryKind>,
        text: &'a str,
    },
}

/// Stateless classifier for right-trimmed, non-blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Characters that may appear in a marker.
    pub const ALPHABET: [char; 3] = [' ', '-', '@'];

    /// Number of leading characters that form the marker.
    pub const MARKER_LEN: usize = 2;

    /// Recognized markers and the category each one selects.
    pub const MARKERS: &'static [(&'static str, CategoryKind)] = &[
        ("  ", CategoryKind::FinishedGame),
        ("- ", CategoryKind::NotFinishedGame),
        (" -", CategoryKind::NotFinishedGame),
        (" @", CategoryKind::FinishedWatched),
        ("@ ", CategoryKind::FinishedWatched),
        ("@-", CategoryKind::NotFinishedWatched),
        ("-@", CategoryKind::NotFinishedWatched),
    ];

    pub fn classify(line: &str) -> LineKind<'_> {
        if Self::is_header(line) {
            return LineKind::Header {
                platform: &line[..line.len() - 1],
            };
        }

        // Split on a char boundary: names are often not ASCII.
        let split = line
            .char_indices()
            .nth(Self::MARKER_LEN)
            .map_or(line.len(), |(idx, _)| idx);
        let (marker, text) = line.split_at(split);

        LineKind::Entry {
            marker,
            kind: Self::marker_kind(marker),
            text,
        }
    }

    /// A header's first two characters are both outside the marker
    /// alphabet and the line ends with a colon.
    pub fn is_header(line: &str) -> bool {
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) => {
                !Self::is_marker_char(first)
                    && !Self::is_marker_char(second)
                    && line.ends_with(':')
            }
            _ => false,
        }
    }

    pub fn marker_kind(marker: &str) -> Option<CategoryKind> {
        Self::MARKERS
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|&(_, kind)| kind)
    }

    /// Characters of `marker` that are not in the marker alphabet.
    pub fn foreign_chars(marker: &str) -> String {
        marker.chars().filter(|c| !Self::is_marker_char(*c)).collect()
    }

    fn is_marker_char(c: char) -> bool {
        Self::ALPHABET.contains(&c)
    }
}
