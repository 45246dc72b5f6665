//! Positional letter-frequency rank heuristic
//!
//! For each position, letters are ranked by how many current candidates
//! have them there (0 = least common, 25 = most common, ties broken
//! alphabetically). A word scores the sum of its five positional ranks, so
//! words built from letters common among the remaining candidates score
//! higher. Ranks are recomputed from the current pool on every pass.

use crate::core::{ALPHABET_LEN, Candidate, Catalog, WORD_LEN, Word};

/// Per-position letter rank table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRanks {
    ranks: [[u8; ALPHABET_LEN]; WORD_LEN],
}

impl PositionRanks {
    /// Build the rank table from the letter histogram of `catalog`
    ///
    /// An empty catalog yields the alphabetical order at every position.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_histogram(&letter_histogram(catalog))
    }

    #[must_use]
    pub fn from_histogram(histogram: &[[usize; ALPHABET_LEN]; WORD_LEN]) -> Self {
        let mut ranks = [[0u8; ALPHABET_LEN]; WORD_LEN];

        for (counts, position_ranks) in histogram.iter().zip(ranks.iter_mut()) {
            let mut order: [u8; ALPHABET_LEN] = std::array::from_fn(|i| i as u8);
            // Stable: equal counts stay in alphabetical order
            order.sort_by_key(|&letter| counts[usize::from(letter)]);
            for (rank, &letter) in order.iter().enumerate() {
                position_ranks[usize::from(letter)] = rank as u8;
            }
        }

        Self { ranks }
    }

    /// Rank of `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn rank(&self, position: usize, letter: u8) -> u8 {
        self.ranks[position][(letter - b'a') as usize]
    }

    /// Sum of the word's positional ranks
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| u32::from(self.rank(position, letter)))
            .sum()
    }
}

/// How many candidates have each letter at each position
#[must_use]
pub fn letter_histogram(catalog: &Catalog) -> [[usize; ALPHABET_LEN]; WORD_LEN] {
    let mut histogram = [[0usize; ALPHABET_LEN]; WORD_LEN];
    for candidate in catalog {
        for (position, &letter) in candidate.word.chars().iter().enumerate() {
            histogram[position][usize::from(letter - b'a')] += 1;
        }
    }
    histogram
}

/// A candidate with its heuristic score for the current pass
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub candidate: &'a Candidate,
    pub score: u32,
}

/// Score every candidate against the catalog's own rank table
///
/// Output is in catalog order; empty for an empty catalog.
#[must_use]
pub fn score_catalog(catalog: &Catalog) -> Vec<Scored<'_>> {
    let ranks = PositionRanks::from_catalog(catalog);
    catalog
        .iter()
        .map(|candidate| Scored {
            candidate,
            score: ranks.score(&candidate.word),
        })
        .collect()
}

/// Score the catalog and order it best first
///
/// Higher score first, then higher frequency; equal pairs keep catalog
/// order.
#[must_use]
pub fn rank_by_heuristic(catalog: &Catalog) -> Vec<Scored<'_>> {
    let mut scored = score_catalog(catalog);
    scored.sort_by(|a, b| {
        (b.score, b.candidate.frequency).cmp(&(a.score, a.candidate.frequency))
    });
    scored
}
