//! Parser for plain-text played-games lists.
//!
//! The input is grouped by platform. Each game line starts with a
//! two-character status marker:
//! ```text
//! PC:
//!   Portal
//! - Half-Life
//! @ Celeste
//! @-Dota 2
//! ```
//! Parsing never fails on the text itself. Lines with unknown markers are
//! collected in the Other bucket, duplicates are skipped, and both are
//! reported through the `log` facade and [`ParseResult::diagnostics`].
//!
//! [`ParseResult::diagnostics`]: played_games_core::ParseResult::diagnostics

pub mod engine;
pub mod error;
pub mod filter;
pub mod line;
pub mod sequence;

pub use engine::{ParseEngine, ParseOptions, parse};
pub use error::{ParseError, SequenceError};
pub use filter::WildcardFilter;
pub use line::{LineClassifier, LineKind};
pub use sequence::{SequenceExpander, expand_game_name};
