use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Work the quote is taken from.
    #[serde(default)]
    pub source: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attribution line, e.g. "Fyodor Dostoevsky, The Idiot".
    pub fn attribution(&self) -> String {
        match &self.source {
            Some(source) => format!("{}, {}", self.author, source),
            None => self.author.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QuoteFile {
    #[serde(default)]
    quote: Vec<Quote>,
}

// --- Parse a single TOML file of [[quote]] tables ---
fn read_quote_file(path: &Path) -> Result<Vec<Quote>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: QuoteFile = toml::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.quote)
}

// --- List *.toml files of a directory, sorted by file name ---
fn sorted_quote_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source: std::io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if !path.is_file() {
            continue;
        }
        let is_toml = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Loads quotes from a TOML file, or from every `*.toml` file of a directory
/// in file name order. Unreadable files inside a directory are skipped.
pub fn load_quotes(path: &Path) -> Result<Vec<Quote>> {
    let quotes = if path.is_dir() {
        let mut quotes = Vec::new();
        for file in sorted_quote_paths(path)? {
            match read_quote_file(&file) {
                Ok(mut loaded) => quotes.append(&mut loaded),
                Err(e) => warn!("skipping quote file: {e}"),
            }
        }
        quotes
    } else {
        read_quote_file(path)?
    };

    if quotes.is_empty() {
        return Err(Error::NoQuotes(path.to_path_buf()));
    }
    info!(count = quotes.len(), path = %path.display(), "quotes loaded");
    Ok(quotes)
}

/// Quotes shown when no quote file is given.
pub fn builtin_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Beauty will save the world.", "Fyodor Dostoevsky").with_source("The Idiot"),
        Quote::new(
            "Pain and suffering are always inevitable for a large intelligence and a deep heart.",
            "Fyodor Dostoevsky",
        )
        .with_source("Crime and Punishment"),
        Quote::new(
            "The soul is healed by being with children.",
            "Fyodor Dostoevsky",
        )
        .with_source("The Idiot"),
        Quote::new(
            "To go wrong in one's own way is better than to go right in someone else's.",
            "Fyodor Dostoevsky",
        )
        .with_source("Crime and Punishment"),
        Quote::new(
            "Above all, don't lie to yourself.",
            "Fyodor Dostoevsky",
        )
        .with_source("The Brothers Karamazov"),
    ]
}
