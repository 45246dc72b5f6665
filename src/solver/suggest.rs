//! Ranked guess recommendations
//!
//! The cheap positional heuristic orders the whole pool, a shortlist of its
//! best words gets the expensive expected-remaining evaluation, and the
//! shortlist is re-ranked by that estimate.

use super::expected::expected_remaining;
use super::heuristic::rank_by_heuristic;
use crate::core::{Catalog, Word};
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

/// Tunable ranking policy
///
/// The shortlist threshold trades latency for quality: above it only the
/// top `shortlist_size` words by heuristic score get the quadratic
/// estimate, at or below it every candidate does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Pool size above which only a shortlist is evaluated (default: 500)
    pub shortlist_threshold: usize,
    /// Shortlist length when the pool exceeds the threshold (default: 20)
    pub shortlist_size: usize,
    /// Maximum number of suggestions returned (default: 20)
    pub display_count: usize,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(shortlist_threshold: usize, shortlist_size: usize, display_count: usize) -> Self {
        Self {
            shortlist_threshold,
            shortlist_size,
            display_count,
        }
    }

    /// How many candidates get the expected-remaining evaluation
    #[must_use]
    pub fn shortlist_len(&self, pool_size: usize) -> usize {
        if pool_size > self.shortlist_threshold {
            self.shortlist_size.min(pool_size)
        } else {
            pool_size
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self::new(500, 20, 20)
    }
}

/// One recommended guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub expected_remaining: f64,
    pub frequency: u64,
    pub heuristic_score: u32,
}

impl Suggestion {
    /// Ranking order: fewer expected remaining first, then rarer, then
    /// lower heuristic score
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.expected_remaining
            .total_cmp(&other.expected_remaining)
            .then(self.frequency.cmp(&other.frequency))
            .then(self.heuristic_score.cmp(&other.heuristic_score))
    }
}

/// Suggestions, most preferred first, plus the size of the pool they came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub suggestions: Vec<Suggestion>,
    pub total_candidates: usize,
}

impl Ranking {
    /// The most preferred suggestion, if any
    #[must_use]
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Rank the catalog's candidates as next guesses
///
/// Steps:
/// 1. score every candidate with the positional rank heuristic
/// 2. order by (score, frequency) descending, ties kept in catalog order
/// 3. take the shortlist per `config`
/// 4. compute expected remaining for each shortlisted word, in parallel
/// 5. re-order by [`Suggestion::rank_cmp`] and keep `display_count`
///
/// An empty catalog yields an empty ranking with zero candidates.
///
/// # Examples
/// ```
/// use wordle_suggest::core::Catalog;
/// use wordle_suggest::solver::{SuggestConfig, suggest};
///
/// let catalog = Catalog::from_pairs(
///     [("glass", 30), ("grass", 20), ("brass", 10), ("class", 5)],
///     0,
/// );
/// let ranking = suggest(&catalog, &SuggestConfig::default());
///
/// assert_eq!(ranking.total_candidates, 4);
/// assert_eq!(ranking.suggestions.len(), 4);
/// assert!(ranking.best().unwrap().expected_remaining >= 1.0);
/// ```
#[must_use]
pub fn suggest(catalog: &Catalog, config: &SuggestConfig) -> Ranking {
    if catalog.is_empty() {
        return Ranking::default();
    }

    let start = Instant::now();
    let mut scored = rank_by_heuristic(catalog);
    scored.truncate(config.shortlist_len(catalog.len()));

    debug!(
        "evaluating {} of {} candidates (heuristic pass {:.1?})",
        scored.len(),
        catalog.len(),
        start.elapsed()
    );

    // Each worker builds its own scratch model inside expected_remaining
    let mut suggestions: Vec<Suggestion> = scored
        .par_iter()
        .map(|s| Suggestion {
            word: s.candidate.word.clone(),
            expected_remaining: expected_remaining(catalog, &s.candidate.word),
            frequency: s.candidate.frequency,
            heuristic_score: s.score,
        })
        .collect();

    suggestions.sort_by(Suggestion::rank_cmp);
    suggestions.truncate(config.display_count);

    debug!("ranking ready in {:.1?}", start.elapsed());

    Ranking {
        suggestions,
        total_candidates: catalog.len(),
    }
}
