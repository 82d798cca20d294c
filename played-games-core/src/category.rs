use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CategoryParseError;
use crate::game::Game;

/// Status category of a game within a platform.
///
/// The four standard kinds come from the two-character line markers.
/// `Other` is reserved for lines that could not be classified and is never
/// produced by a marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    FinishedGame,
    NotFinishedGame,
    FinishedWatched,
    NotFinishedWatched,
    Other,
}

/// All category kinds in declaration order.
const ALL_KINDS: &[CategoryKind] = &[
    CategoryKind::FinishedGame,
    CategoryKind::NotFinishedGame,
    CategoryKind::FinishedWatched,
    CategoryKind::NotFinishedWatched,
    CategoryKind::Other,
];

impl CategoryKind {
    /// Canonical name used in snapshots and settings files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FinishedGame => "FINISHED_GAME",
            Self::NotFinishedGame => "NOT_FINISHED_GAME",
            Self::FinishedWatched => "FINISHED_WATCHED",
            Self::NotFinishedWatched => "NOT_FINISHED_WATCHED",
            Self::Other => "OTHER",
        }
    }

    /// Short name used on the command line.
    pub fn short_name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// All accepted lowercase spellings, short name first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FinishedGame => &["finished", "finished-game", "finished_game", "fg"],
            Self::NotFinishedGame => &[
                "not-finished",
                "not-finished-game",
                "not_finished_game",
                "unfinished",
                "nfg",
            ],
            Self::FinishedWatched => &["watched", "finished-watched", "finished_watched", "fw"],
            Self::NotFinishedWatched => &[
                "not-watched",
                "not-finished-watched",
                "not_finished_watched",
                "nfw",
            ],
            Self::Other => &["other", "unknown"],
        }
    }

    /// All five kinds, standard ones first.
    pub fn all() -> &'static [CategoryKind] {
        ALL_KINDS
    }

    /// Whether this kind comes from a line marker (everything but `Other`).
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = CategoryParseError;

    /// Parse a kind from its canonical name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &kind in ALL_KINDS {
            if kind.name().eq_ignore_ascii_case(&lower) {
                return Ok(kind);
            }
            if kind.aliases().iter().any(|alias| *alias == lower) {
                return Ok(kind);
            }
        }
        Err(CategoryParseError(s.to_string()))
    }
}

/// The games of one kind within a platform.
///
/// Games keep insertion order until [`Category::sort`] is called. A name can
/// appear at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    kind: CategoryKind,
    games: Vec<Game>,
    seen: HashSet<String>,
}

impl Category {
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            games: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Add a game by name. Returns `false` and leaves the category untouched
    /// if a game with that name is already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.games.push(Game::new(name, self.kind));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    /// Number of games in the category.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Sort games by name (codepoint order).
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.games.sort_by(|a, b| b.name().cmp(a.name()));
        } else {
            self.games.sort_by(|a, b| a.name().cmp(b.name()));
        }
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Category {
    /// A category serializes as the plain list of its game names.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.games.iter().map(Game::name))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
