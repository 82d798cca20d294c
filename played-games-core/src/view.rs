//! Aggregate queries used by front ends to summarize a parse.

use std::collections::{BTreeMap, HashSet};

use crate::category::CategoryKind;
use crate::platform::Platform;
use crate::result::ParseResult;

/// Identity of a game across a whole parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameKey<'a> {
    pub platform: &'a str,
    pub name: &'a str,
    pub kind: CategoryKind,
}

/// Borrowed, read-only view over a [`ParseResult`].
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    result: &'a ParseResult,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a ParseResult) -> Self {
        Self { result }
    }

    /// Every distinct game in both the main collection and the Other bucket.
    pub fn games(&self) -> HashSet<GameKey<'a>> {
        self.result
            .platforms
            .iter()
            .chain(self.result.other.iter())
            .flat_map(|platform| {
                platform.games().map(move |game| GameKey {
                    platform: platform.name(),
                    name: game.name(),
                    kind: game.kind(),
                })
            })
            .collect()
    }

    pub fn count_games(&self) -> usize {
        self.games().len()
    }

    /// Number of platforms in the main collection (Other is not counted).
    pub fn count_platforms(&self) -> usize {
        self.result.platforms.len()
    }

    pub fn count_other_games(&self) -> usize {
        self.result.other.count_games()
    }

    pub fn count_other_platforms(&self) -> usize {
        self.result.other.len()
    }

    /// Platforms ordered by game count, largest first. Platforms with equal
    /// counts keep the order they first appeared in.
    pub fn sorted_platforms(&self) -> Vec<&'a Platform> {
        let mut platforms: Vec<&Platform> = self.result.platforms.iter().collect();
        platforms.sort_by(|a, b| b.count_games().cmp(&a.count_games()));
        platforms
    }

    /// Games per category kind across the main collection.
    pub fn category_totals(&self) -> BTreeMap<CategoryKind, usize> {
        let mut totals = BTreeMap::new();
        for platform in &self.result.platforms {
            for category in platform.categories() {
                *totals.entry(category.kind()).or_insert(0) += category.len();
            }
        }
        totals
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
