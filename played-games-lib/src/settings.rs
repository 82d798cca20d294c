//! Saved settings shared by the front ends.
//!
//! The settings file is `~/.config/played-games/settings.toml`. It stores the
//! text source and the parse switches so a front end starts where the user
//! left off:
//!
//! ```toml
//! [source]
//! location = "https://gist.github.com/gil9red/2f80a34fb601cd685353"
//!
//! [parse]
//! expand_sequences = true
//! sort = false
//! sort_descending = false
//! filter_ignore_case = false
//! categories = ["FINISHED_GAME", "NOT_FINISHED_GAME", "FINISHED_WATCHED", "NOT_FINISHED_WATCHED", "OTHER"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use played_games_core::CategoryKind;
use played_games_parser::ParseOptions;

use crate::error::SettingsError;

/// Where the games list lives unless the user picks something else.
pub const DEFAULT_SOURCE: &str = "https://gist.github.com/gil9red/2f80a34fb601cd685353";

/// Canonical path to the settings file: `~/.config/played-games/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("played-games").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub parse: ParseSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Local file path or URL of the games list.
    pub location: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: DEFAULT_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    pub expand_sequences: bool,
    pub sort: bool,
    pub sort_descending: bool,
    pub filter_ignore_case: bool,
    pub categories: Vec<CategoryKind>,
}

impl Default for ParseSettings {
    fn default() -> Self {
        let defaults = ParseOptions::default();
        Self {
            expand_sequences: defaults.expand_sequences,
            sort: defaults.sort,
            sort_descending: defaults.sort_descending,
            filter_ignore_case: defaults.filter_ignore_case,
            categories: defaults.categories.into_iter().collect(),
        }
    }
}

impl Settings {
    /// Load from [`settings_path`], falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from `path`. A missing or unreadable file gives the defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file {}: {e}", path.display());
                log::debug!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`, reporting parse errors. A missing file is not an
    /// error and gives the defaults.
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save to [`settings_path`].
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_path())
    }

    /// Write atomically to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = self.to_toml_string()?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// The settings as they would be written to the settings file.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Delete the file at `path`. Returns whether a file was removed.
    pub fn reset(path: &Path) -> Result<bool, SettingsError> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }

    /// Parse options from the saved switches and the given filter.
    pub fn parse_options(&self, filter: &str) -> ParseOptions {
        ParseOptions::new()
            .filter(filter)
            .filter_ignore_case(self.parse.filter_ignore_case)
            .expand_sequences(self.parse.expand_sequences)
            .sort(self.parse.sort)
            .sort_descending(self.parse.sort_descending)
            .categories(self.parse.categories.iter().copied())
    }

    /// Load the file at `path` as a pretty-printed TOML string for display.
    pub fn load_string(path: &Path) -> Option<String> {
        let contents = std::fs::read_to_string(path).ok()?;
        let doc: toml::Value = contents.parse().ok()?;
        toml::to_string_pretty(&doc).ok()
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
