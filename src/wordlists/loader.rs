//! Word/frequency list loading
//!
//! The format is one `word frequency` entry per line, fields separated by
//! whitespace. Lines whose word is not exactly five lowercase ASCII letters
//! are skipped; a line with an acceptable word but no valid frequency
//! aborts the load.

use super::DEFAULT_WORDS;
use crate::core::{Catalog, CatalogBuilder, WORD_LEN, Word};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Options applied while building a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Words seen fewer times than this are dropped (default: 1000)
    pub min_frequency: u64,
}

impl LoadOptions {
    #[must_use]
    pub const fn new(min_frequency: u64) -> Self {
        Self { min_frequency }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: missing or invalid frequency in '{text}'")]
    BadFrequency { line: usize, text: String },
}

fn is_entry_word(text: &str) -> bool {
    text.len() == WORD_LEN && text.bytes().all(|b| b.is_ascii_lowercase())
}

/// Build a catalog from the text of a word/frequency list
///
/// Repeated words have their frequencies summed and keep the position of
/// their first occurrence.
///
/// # Errors
/// Returns `LoadError::BadFrequency` with the 1-based line number of the
/// first accepted word whose frequency is missing or not a non-negative
/// integer.
///
/// # Examples
/// ```
/// use wordle_suggest::wordlists::{LoadOptions, parse_catalog};
///
/// let text = "glass 1200\nParis 5000\nbrass 300\n\nglass 800\n";
/// let catalog = parse_catalog(text, &LoadOptions::new(1000)).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.find("glass").unwrap().frequency, 2000);
///
/// assert!(parse_catalog("glass many\n", &LoadOptions::default()).is_err());
/// ```
pub fn parse_catalog(text: &str, options: &LoadOptions) -> Result<Catalog, LoadError> {
    let mut builder = CatalogBuilder::default();
    let mut skipped = 0usize;

    for (index, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        if !is_entry_word(word) {
            skipped += 1;
            continue;
        }

        let frequency = fields
            .next()
            .and_then(|field| field.parse::<u64>().ok())
            .ok_or_else(|| LoadError::BadFrequency {
                line: index + 1,
                text: line.trim().to_string(),
            })?;

        match Word::new(word) {
            Ok(word) => builder.add(word, frequency),
            Err(e) => debug!("line {}: skipping '{word}': {e}", index + 1),
        }
    }

    if builder.merged() > 0 {
        warn!("merged {} repeated entries", builder.merged());
    }
    let distinct = builder.len();
    let catalog = builder.finish(options.min_frequency);
    info!(
        "loaded {} words ({skipped} lines skipped, {} below frequency {})",
        catalog.len(),
        distinct - catalog.len(),
        options.min_frequency
    );

    Ok(catalog)
}

/// Load a catalog from a word/frequency file
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read, otherwise see
/// [`parse_catalog`].
///
/// # Examples
/// ```no_run
/// use wordle_suggest::wordlists::{LoadOptions, load_from_file};
///
/// let catalog = load_from_file("data/freq.txt", &LoadOptions::default()).unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", content.len(), path.display());
    parse_catalog(&content, options)
}

/// The embedded default list under `options`
#[must_use]
pub fn default_catalog(options: &LoadOptions) -> Catalog {
    let catalog = Catalog::from_pairs(DEFAULT_WORDS.iter().copied(), options.min_frequency);
    info!(
        "embedded list: {} of {} words at frequency >= {}",
        catalog.len(),
        DEFAULT_WORDS.len(),
        options.min_frequency
    );
    catalog
}
