//! Loading the raw games text.
//!
//! The text can come from a local file, stdin (`-`), or a URL. GitHub gist
//! page URLs are rewritten to their `/raw` endpoint, which always serves the
//! latest revision of the gist's first file.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::SourceError;

const GIST_PREFIX: &str = "https://gist.github.com/";

/// Load the games text from `source`.
///
/// An existing file wins over a URL, so a local copy can shadow the remote
/// list.
pub fn load_text(source: &str) -> Result<String, SourceError> {
    if source == "-" {
        log::debug!("Reading games list from stdin");
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(source);
    if path.is_file() {
        log::debug!("Reading games list from {}", path.display());
        let text = fs::read_to_string(path)?;
        log::debug!("Read {} bytes", text.len());
        return Ok(text);
    }

    if is_url(source) {
        return fetch(&raw_url(source));
    }

    Err(SourceError::not_found(source))
}

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Rewrite a gist page URL (`https://gist.github.com/<user>/<id>`) to the
/// raw content of its latest revision. Other URLs are returned unchanged.
pub fn raw_url(url: &str) -> String {
    let Some(rest) = url.strip_prefix(GIST_PREFIX) else {
        return url.to_string();
    };
    if rest.contains(['?', '#']) {
        return url.to_string();
    }
    let rest = rest.trim_end_matches('/');
    let segments: Vec<&str> = rest.split('/').collect();
    let is_page = matches!(segments.len(), 1 | 2) && segments.iter().all(|s| !s.is_empty());
    if is_page {
        format!("{GIST_PREFIX}{rest}/raw")
    } else {
        url.to_string()
    }
}

fn fetch(url: &str) -> Result<String, SourceError> {
    log::debug!("Downloading {url}");
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(SourceError::Http {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    let text = response.text()?;
    log::debug!("Downloaded {} bytes", text.len());
    Ok(text)
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
