use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::category::{Category, CategoryKind};
use crate::game::Game;

/// A named group of games (a console, "PC", ...).
///
/// Categories are created on first access through [`Platform::category`],
/// so a platform only holds the kinds that were actually populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    name: String,
    categories: BTreeMap<CategoryKind, Category>,
}

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the category of the given kind, creating it if needed.
    pub fn category(&mut self, kind: CategoryKind) -> &mut Category {
        self.categories
            .entry(kind)
            .or_insert_with(|| Category::new(kind))
    }

    /// Get an existing category without creating it.
    pub fn get(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.get(&kind)
    }

    /// Categories in `CategoryKind` order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn count_categories(&self) -> usize {
        self.categories.len()
    }

    /// Total number of games across all categories.
    pub fn count_games(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    /// Every game on the platform, category by category.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.categories.values().flat_map(Category::iter)
    }

    pub fn is_empty(&self) -> bool {
        self.count_games() == 0
    }

    pub fn sort_games(&mut self, descending: bool) {
        for category in self.categories.values_mut() {
            category.sort(descending);
        }
    }
}

impl Serialize for Platform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (kind, category) in &self.categories {
            map.serialize_entry(kind.name(), category)?;
        }
        map.end()
    }
}

/// Platforms keyed by name, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformMap {
    platforms: Vec<Platform>,
    index: HashMap<String, usize>,
}

impl PlatformMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the platform with this name, appending a new empty one if absent.
    pub fn get_or_create(&mut self, name: &str) -> &mut Platform {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.platforms.push(Platform::new(name));
                let idx = self.platforms.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.platforms[idx]
    }

    pub fn get(&self, name: &str) -> Option<&Platform> {
        self.index.get(name).map(|&idx| &self.platforms[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Platform> {
        self.platforms.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(Platform::name)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Total number of games across all platforms.
    pub fn count_games(&self) -> usize {
        self.platforms.iter().map(Platform::count_games).sum()
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
        self.index.clear();
    }

    /// Drop every platform without games, keeping the order of the rest.
    /// Returns the number of platforms removed.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.platforms.len();
        self.platforms.retain(|p| !p.is_empty());
        if self.platforms.len() != before {
            self.index = self
                .platforms
                .iter()
                .enumerate()
                .map(|(idx, p)| (p.name().to_string(), idx))
                .collect();
        }
        before - self.platforms.len()
    }
}

impl<'a> IntoIterator for &'a PlatformMap {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PlatformMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.platforms.len()))?;
        for platform in &self.platforms {
            map.serialize_entry(platform.name(), platform)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
