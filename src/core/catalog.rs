//! Ordered pool of candidate words with their corpus frequencies

use super::Word;
use rustc_hash::FxHashMap;

/// A word in the solving pool together with its corpus occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: Word,
    pub frequency: u64,
}

impl Candidate {
    #[must_use]
    pub const fn new(word: Word, frequency: u64) -> Self {
        Self { word, frequency }
    }
}

/// Ordered candidate pool
///
/// Order is load order. It carries no meaning beyond making ranking
/// tie-breaks stable. The pool only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    #[must_use]
    pub const fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Build a catalog from `(word, frequency)` pairs
    ///
    /// Invalid words are skipped, repeated words have their frequencies
    /// summed at the position of the first occurrence, and words below
    /// `min_frequency` are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::Catalog;
    ///
    /// let catalog = Catalog::from_pairs(
    ///     [("alpha", 10), ("bogus!", 5), ("amber", 3), ("alpha", 4)],
    ///     5,
    /// );
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.find("alpha").unwrap().frequency, 14);
    /// ```
    #[must_use]
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, u64)>,
        min_frequency: u64,
    ) -> Self {
        let mut builder = CatalogBuilder::default();
        for (text, frequency) in pairs {
            if let Ok(word) = Word::new(text) {
                builder.add(word, frequency);
            }
        }
        builder.finish(min_frequency)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.word.text() == text)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.candidates.iter().any(|c| &c.word == word)
    }

    /// Keep only candidates matching `keep`, preserving order
    ///
    /// Returns the number of candidates removed.
    pub fn retain(&mut self, keep: impl FnMut(&Candidate) -> bool) -> usize {
        let before = self.candidates.len();
        self.candidates.retain(keep);
        before - self.candidates.len()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl FromIterator<Candidate> for Catalog {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Accumulates candidates in first-seen order, merging repeats
#[derive(Debug, Default)]
pub(crate) struct CatalogBuilder {
    candidates: Vec<Candidate>,
    index: FxHashMap<String, usize>,
    merged: usize,
}

impl CatalogBuilder {
    pub(crate) fn add(&mut self, word: Word, frequency: u64) {
        if let Some(&slot) = self.index.get(word.text()) {
            let existing = &mut self.candidates[slot].frequency;
            *existing = existing.saturating_add(frequency);
            self.merged += 1;
            return;
        }
        self.index
            .insert(word.text().to_string(), self.candidates.len());
        self.candidates.push(Candidate::new(word, frequency));
    }

    /// Distinct words added so far
    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Number of repeated entries folded into earlier ones
    pub(crate) const fn merged(&self) -> usize {
        self.merged
    }

    pub(crate) fn finish(self, min_frequency: u64) -> Catalog {
        self.candidates
            .into_iter()
            .filter(|c| c.frequency >= min_frequency)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_pairs(
            [("alpha", 50), ("allot", 40), ("apple", 30), ("adieu", 20)],
            0,
        )
    }

    #[test]
    fn from_pairs_keeps_load_order() {
        let catalog = sample();
        let texts: Vec<&str> = catalog.iter().map(|c| c.word.text()).collect();
        assert_eq!(texts, ["alpha", "allot", "apple", "adieu"]);
    }

    #[test]
    fn from_pairs_merges_repeats_at_first_position() {
        let catalog = Catalog::from_pairs([("amber", 1), ("adieu", 2), ("amber", 3)], 0);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.as_slice()[0].word.text(), "amber");
        assert_eq!(catalog.as_slice()[0].frequency, 4);
    }

    #[test]
    fn from_pairs_applies_min_frequency_after_merging() {
        let catalog = Catalog::from_pairs([("amber", 600), ("adieu", 900), ("amber", 600)], 1000);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("amber").is_some());
        assert!(catalog.find("adieu").is_none());
    }

    #[test]
    fn retain_is_stable_and_counts_removed() {
        let mut catalog = sample();
        let removed = catalog.retain(|c| c.word.has_letter(b'p'));
        assert_eq!(removed, 2);
        let texts: Vec<&str> = catalog.iter().map(|c| c.word.text()).collect();
        assert_eq!(texts, ["alpha", "apple"]);
    }

    #[test]
    fn contains_and_find() {
        let catalog = sample();
        assert!(catalog.contains(&Word::new("apple").unwrap()));
        assert!(!catalog.contains(&Word::new("amber").unwrap()));
        assert_eq!(catalog.find("allot").map(|c| c.frequency), Some(40));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find("alpha").is_none());
    }
}
