use thiserror::Error;

use played_games_lib::{ParseError, SettingsError, SourceError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The games text could not be loaded
    #[error("Cannot load games list: {0}")]
    Source(#[from] SourceError),

    /// Reading or writing the settings file failed
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The filter pattern was rejected
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Snapshot serialization failed
    #[error("Cannot serialize result: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
