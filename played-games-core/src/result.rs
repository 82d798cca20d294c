use serde::Serialize;

use crate::platform::PlatformMap;
use crate::view::ResultView;

/// Everything produced by one parse of a games list.
///
/// `platforms` holds games whose line marker was recognized; `other` holds
/// lines that need human review, keyed by the platform they appeared under.
/// Diagnostics are kept for callers but are not part of the serialized tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub platforms: PlatformMap,
    pub other: PlatformMap,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
        self.other.clear();
        self.diagnostics.clear();
    }

    /// Read-only aggregate queries over this result.
    pub fn view(&self) -> ResultView<'_> {
        ResultView::new(self)
    }
}

/// A recoverable anomaly found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the parsed text.
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The two-character marker is not in the marker table.
    UnknownMarker {
        marker: String,
        platform: String,
        text: String,
    },
    /// A game with this name already exists in the category.
    DuplicateGame {
        platform: String,
        name: String,
        kind: crate::CategoryKind,
    },
    /// A sequence expression could not be expanded as written.
    MalformedSequence { text: String, reason: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::UnknownMarker {
                marker,
                platform,
                text,
            } => write!(
                f,
                "unknown marker {marker:?} under {platform}: {text}"
            ),
            DiagnosticKind::DuplicateGame {
                platform,
                name,
                kind,
            } => write!(f, "duplicate game \"{name}\" in {platform} / {kind}"),
            DiagnosticKind::MalformedSequence { text, reason } => {
                write!(f, "malformed sequence in \"{text}\": {reason}")
            }
        }
    }
}
