//! The line-by-line parse of a whole games list.

use std::collections::BTreeSet;
use std::time::Instant;

use played_games_core::{CategoryKind, Diagnostic, DiagnosticKind, ParseResult};

use crate::error::ParseError;
use crate::filter::WildcardFilter;
use crate::line::{LineClassifier, LineKind};
use crate::sequence::SequenceExpander;

/// Options that control how a games list is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Wildcard filter on game names. A trailing `*` is implied.
    pub filter: String,

    /// Match the filter case-insensitively.
    pub filter_ignore_case: bool,

    /// Expand series notation such as `"Name 1-3"` into separate games.
    pub expand_sequences: bool,

    /// Sort the games of every category by name.
    pub sort: bool,

    /// Sort in descending order. Only used when `sort` is set.
    pub sort_descending: bool,

    /// Categories to keep. Games of other kinds are skipped; without
    /// `Other`, unrecognized lines are dropped.
    pub categories: BTreeSet<CategoryKind>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            filter: String::new(),
            filter_ignore_case: false,
            expand_sequences: true,
            sort: false,
            sort_descending: false,
            categories: CategoryKind::all().iter().copied().collect(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn filter_ignore_case(mut self, ignore_case: bool) -> Self {
        self.filter_ignore_case = ignore_case;
        self
    }

    pub fn expand_sequences(mut self, expand: bool) -> Self {
        self.expand_sequences = expand;
        self
    }

    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = CategoryKind>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn allows(&self, kind: CategoryKind) -> bool {
        self.categories.contains(&kind)
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    NoPlatform,
    InPlatform(&'a str),
}

/// A game line under an active platform.
struct Entry<'a> {
    number: usize,
    line: &'a str,
    platform: &'a str,
    marker: &'a str,
    kind: Option<CategoryKind>,
    text: &'a str,
}

/// Parses games lists into a [`ParseResult`] it owns.
///
/// Every call to [`ParseEngine::parse`] clears the previous result and
/// rebuilds it from scratch.
#[derive(Debug, Default)]
pub struct ParseEngine {
    expander: SequenceExpander,
    result: ParseResult,
}

impl ParseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }

    /// Parse `text`, replacing the previous result.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFilter`] if `options.filter` cannot be
    /// compiled. Malformed lines never fail the parse; they end up in the
    /// Other bucket or in [`ParseResult::diagnostics`].
    pub fn parse(&mut self, text: &str, options: &ParseOptions) -> Result<&ParseResult, ParseError> {
        let started = Instant::now();
        log::debug!("Start parsing ({} bytes)", text.len());

        let filter = WildcardFilter::new(&options.filter, options.filter_ignore_case)?;
        log::debug!("filter={:?}", filter.pattern());

        self.result.clear();
        let mut state = State::NoPlatform;

        for (idx, raw) in text.split('\n').enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            match LineClassifier::classify(line) {
                LineKind::Header { platform } => {
                    self.result.platforms.get_or_create(platform);
                    state = State::InPlatform(platform);
                }
                LineKind::Entry { marker, kind, text } => {
                    // Lines before the first header have no platform
                    let State::InPlatform(platform) = state else {
                        continue;
                    };
                    self.add_entry(
                        Entry {
                            number: idx + 1,
                            line,
                            platform,
                            marker,
                            kind,
                            text,
                        },
                        options,
                        &filter,
                    );
                }
            }
        }

        let pruned = self.result.platforms.prune_empty() + self.result.other.prune_empty();
        if pruned > 0 {
            log::debug!("Removed {pruned} empty platform(s)");
        }

        if options.sort {
            for platform in self
                .result
                .platforms
                .iter_mut()
                .chain(self.result.other.iter_mut())
            {
                platform.sort_games(options.sort_descending);
            }
        }

        log::debug!(
            "Finish parsing. Elapsed time: {:.3} sec.",
            started.elapsed().as_secs_f64()
        );
        Ok(&self.result)
    }

    fn add_entry(&mut self, entry: Entry<'_>, options: &ParseOptions, filter: &WildcardFilter) {
        let names = if options.expand_sequences {
            self.expand(&entry)
        } else {
            vec![entry.text.to_string()]
        };

        let names: Vec<String> = names.into_iter().filter(|n| filter.matches(n)).collect();
        if names.is_empty() {
            return;
        }

        match entry.kind {
            Some(kind) => {
                if !options.allows(kind) {
                    return;
                }
                let category = self
                    .result
                    .platforms
                    .get_or_create(entry.platform)
                    .category(kind);
                for name in names {
                    if !category.add(name.as_str()) {
                        log::info!(
                            "Skipped duplicate game \"{}\" in {} / {}",
                            name,
                            entry.platform,
                            kind
                        );
                        self.result.diagnostics.push(Diagnostic {
                            line: entry.number,
                            kind: DiagnosticKind::DuplicateGame {
                                platform: entry.platform.to_string(),
                                name,
                                kind,
                            },
                        });
                    }
                }
            }
            None => {
                log::warn!(
                    "Unknown marker {:?} (foreign chars {:?}), line {}: {:?}, platform: {}",
                    entry.marker,
                    LineClassifier::foreign_chars(entry.marker),
                    entry.number,
                    entry.line,
                    entry.platform
                );
                self.result.diagnostics.push(Diagnostic {
                    line: entry.number,
                    kind: DiagnosticKind::UnknownMarker {
                        marker: entry.marker.to_string(),
                        platform: entry.platform.to_string(),
                        text: entry.line.to_string(),
                    },
                });

                if !options.allows(CategoryKind::Other) {
                    return;
                }
                let added = self
                    .result
                    .other
                    .get_or_create(entry.platform)
                    .category(CategoryKind::Other)
                    .add(entry.line);
                if !added {
                    log::info!(
                        "Skipped duplicate unclassified line {:?} under {}",
                        entry.line,
                        entry.platform
                    );
                    self.result.diagnostics.push(Diagnostic {
                        line: entry.number,
                        kind: DiagnosticKind::DuplicateGame {
                            platform: entry.platform.to_string(),
                            name: entry.line.to_string(),
                            kind: CategoryKind::Other,
                        },
                    });
                }
            }
        }
    }

    fn expand(&mut self, entry: &Entry<'_>) -> Vec<String> {
        match self.expander.try_expand(entry.text) {
            Ok(names) => names,
            Err(e) => {
                log::warn!(
                    "Cannot expand \"{}\" on line {}: {}",
                    entry.text,
                    entry.number,
                    e
                );
                let fallback = e.fallback(entry.text);
                self.result.diagnostics.push(Diagnostic {
                    line: entry.number,
                    kind: DiagnosticKind::MalformedSequence {
                        text: entry.text.to_string(),
                        reason: e.to_string(),
                    },
                });
                fallback
            }
        }
    }
}

/// Parse `text` with a fresh engine and return the owned result.
///
/// # Examples
///
/// ```
/// use played_games_core::CategoryKind;
/// use played_games_parser::{parse, ParseOptions};
///
/// let result = parse("PC:\n  Portal\n- Half-Life\n", &ParseOptions::default()).unwrap();
/// let pc = result.platforms.get("PC").unwrap();
/// assert_eq!(pc.get(CategoryKind::FinishedGame).unwrap().games()[0].name(), "Portal");
/// assert_eq!(pc.count_games(), 2);
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Result<ParseResult, ParseError> {
    let mut engine = ParseEngine::new();
    engine.parse(text, options)?;
    Ok(engine.into_result())
}
