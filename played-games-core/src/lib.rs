//! Data model for a played-games list: platforms, status categories and
//! the games inside them.
//!
//! This crate has no parsing logic and does no I/O. `played-games-parser`
//! fills a [`ParseResult`]; front ends read it through [`ResultView`] or
//! serialize it as a `{platform: {CATEGORY: [game, ...]}}` tree.

pub mod category;
pub mod error;
pub mod game;
pub mod platform;
pub mod result;
pub mod view;

pub use category::{Category, CategoryKind};
pub use error::CategoryParseError;
pub use game::Game;
pub use platform::{Platform, PlatformMap};
pub use result::{Diagnostic, DiagnosticKind, ParseResult};
pub use view::{GameKey, ResultView};
