//! Word/frequency lists
//!
//! The default list is compiled into the binary; `loader` reads the same
//! `word frequency` format from disk.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{LoadError, LoadOptions, default_catalog, load_from_file, parse_catalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_valid() {
        for &(word, _) in DEFAULT_WORDS {
            assert_eq!(word.len(), 5, "'{word}' is not 5 letters");
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "'{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_catalog_respects_min_frequency() {
        let options = LoadOptions::default();
        let catalog = default_catalog(&options);
        assert!(!catalog.is_empty());
        assert!(catalog.len() <= DEFAULT_WORDS_COUNT);
        assert!(catalog.iter().all(|c| c.frequency >= options.min_frequency));

        let everything = default_catalog(&LoadOptions::new(0));
        assert!(everything.len() >= catalog.len());
    }
}
