//! Compact set of lowercase ASCII letters

use std::fmt;

/// A set of letters `a`..=`z` stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Build a set from a byte slice of lowercase letters
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        letters.iter().fold(Self::EMPTY, |set, &l| set.with(l))
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = LetterSet::EMPTY;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(b'a'));
    }

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::default();
        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a');

        assert_eq!(set.len(), 2);
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
    }

    #[test]
    fn from_letters_collapses_duplicates() {
        let set = LetterSet::from_letters(b"sassy");
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "asy");
    }

    #[test]
    fn subset_and_intersection() {
        let word = LetterSet::from_letters(b"glass");
        assert!(word.contains_all(LetterSet::from_letters(b"sa")));
        assert!(!word.contains_all(LetterSet::from_letters(b"sy")));
        assert!(word.intersects(LetterSet::from_letters(b"xyzg")));
        assert!(!word.intersects(LetterSet::from_letters(b"xyz")));
        assert!(word.contains_all(LetterSet::EMPTY));
    }

    #[test]
    fn clear_empties_set() {
        let mut set = LetterSet::from_letters(b"crane");
        set.clear();
        assert_eq!(set, LetterSet::EMPTY);
    }
}
