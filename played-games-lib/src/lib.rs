//! Shared front-end support for played-games: saved settings, loading the
//! games text, and display helpers.

pub mod display;
pub mod error;
pub mod settings;
pub mod source;

pub use error::{SettingsError, SourceError};
pub use settings::{DEFAULT_SOURCE, Settings, settings_path};
pub use source::load_text;

pub use played_games_core::{CategoryKind, ParseResult, ResultView};
pub use played_games_parser::{ParseEngine, ParseError, ParseOptions};
