use thiserror::Error;

/// Errors returned by [`crate::ParseEngine::parse`].
///
/// The games text itself never produces an error; only caller-supplied
/// parameters can be rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The wildcard filter could not be compiled
    #[error("Invalid filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ParseError {
    pub fn invalid_filter(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidFilter {
            pattern: pattern.into(),
            source,
        }
    }
}

/// A sequence expression that matched the pattern but cannot be expanded
/// as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The range runs backwards, e.g. `7-3`
    #[error("descending range {lo}-{hi}")]
    DescendingRange { lo: u32, hi: u32 },

    /// The range would produce more names than allowed
    #[error("range {lo}-{hi} has more than {max} entries")]
    RangeTooLong { lo: u32, hi: u32, max: u32 },

    /// A range bound does not fit in a `u32`
    #[error("invalid number in range: {0}")]
    InvalidNumber(String),
}

impl SequenceError {
    /// Names to use in place of a failed expansion.
    ///
    /// A descending range expands to nothing. Any other failure keeps the
    /// original name as a single entry.
    pub fn fallback(&self, name: &str) -> Vec<String> {
        match self {
            Self::DescendingRange { .. } => Vec::new(),
            Self::RangeTooLong { .. } | Self::InvalidNumber(_) => vec![name.to_string()],
        }
    }
}
