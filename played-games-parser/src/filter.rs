//! Shell-style wildcard filter for game names.
//!
//! Supports `*`, `?`, `[seq]` and `[!seq]`. The pattern is translated to an
//! anchored regular expression. A trailing `*` is appended unless present,
//! so a plain word works as a prefix search and the empty pattern matches
//! every name.

use regex::{Regex, RegexBuilder};

use crate::error::ParseError;

#[derive(Debug, Clone)]
pub struct WildcardFilter {
    pattern: String,
    regex: Regex,
}

impl WildcardFilter {
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, ParseError> {
        let pattern = if pattern.ends_with('*') {
            pattern.to_string()
        } else {
            format!("{pattern}*")
        };

        let regex = RegexBuilder::new(&translate(&pattern))
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| ParseError::invalid_filter(pattern.clone(), e))?;

        Ok(Self { pattern, regex })
    }

    /// The effective pattern, including the implied trailing `*`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate a wildcard pattern into an anchored regex.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("^(?s:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                // Unterminated: a literal bracket
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(")$");
    out
}

/// Index of the `]` closing a class whose body starts at `start`.
/// A `]` right after `[` or `[!` is part of the body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

fn translate_class(body: &[char]) -> String {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut k = 0;
    while k < body.len() {
        if k + 2 < body.len() && body[k + 1] == '-' {
            let (lo, hi) = (body[k], body[k + 2]);
            // Reversed ranges are empty
            if lo <= hi {
                push_class_char(&mut items, lo);
                items.push('-');
                push_class_char(&mut items, hi);
            }
            k += 3;
        } else {
            push_class_char(&mut items, body[k]);
            k += 1;
        }
    }

    match (items.is_empty(), negated) {
        // never matches
        (true, false) => r"\b\B".to_string(),
        (true, true) => ".".to_string(),
        (false, false) => format!("[{items}]"),
        (false, true) => format!("[^{items}]"),
    }
}

fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}
