use thiserror::Error;

/// Errors that can occur while loading the games text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// I/O error while reading a local file or stdin
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Neither an existing file nor an http(s) URL
    #[error("Source not found: {0}")]
    NotFound(String),
}

impl SourceError {
    pub fn not_found(source: impl Into<String>) -> Self {
        Self::NotFound(source.into())
    }
}

/// Errors that can occur while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
