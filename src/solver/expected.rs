//! Expected candidate-pool size after a guess
//!
//! Every current candidate is treated in turn as the hidden answer. The
//! guess is compared against it, the resulting feedback is turned into a
//! constraint model, and the survivors are counted. The average over all
//! hypotheses is the expected pool size after guessing; lower is better.
//!
//! Cost is quadratic in the pool size per guess evaluated.

use super::filter::count_matching;
use crate::core::{Catalog, ConstraintModel, Word, diff};

/// Average number of candidates left after guessing `guess`
///
/// Uses a running mean rather than a sum to keep the accumulator bounded
/// on large pools. Returns 0.0 for an empty catalog.
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Catalog, Word};
/// use wordle_suggest::solver::expected_remaining;
///
/// let catalog = Catalog::from_pairs([("glass", 1), ("grass", 1), ("brass", 1)], 0);
/// let guess = Word::new("glass").unwrap();
///
/// // "glass" tells all three apart
/// assert!((expected_remaining(&catalog, &guess) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(catalog: &Catalog, guess: &Word) -> f64 {
    let mut scratch = ConstraintModel::new();
    let mut mean = 0.0;

    for (i, hypothesis) in catalog.iter().enumerate() {
        scratch.reset();
        // Feedback derived from a real word is always consistent; treat a
        // failure as eliminating everything.
        let survivors = match scratch.apply(&diff(guess, &hypothesis.word)) {
            Ok(()) => count_matching(&scratch, catalog),
            Err(_) => 0,
        };
        mean += (survivors as f64 - mean) / (i + 1) as f64;
    }

    mean
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(words: &[&str]) -> Catalog {
        Catalog::from_pairs(words.iter().map(|&w| (w, 1)), 0)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_catalog_expects_nothing() {
        assert!(expected_remaining(&Catalog::default(), &word("crane")).abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_expects_one() {
        let catalog = catalog_of(&["amber"]);
        assert!((expected_remaining(&catalog, &word("amber")) - 1.0).abs() < 1e-9);
        assert!((expected_remaining(&catalog, &word("zzzzz")) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uninformative_guess_keeps_whole_pool() {
        // No shared letters with any candidate: every hypothesis leaves all three
        let catalog = catalog_of(&["glass", "grass", "brass"]);
        assert!((expected_remaining(&catalog, &word("quick")) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn partial_split_matches_hand_count() {
        // "fuzzy" shares no letters so nothing is eliminated; "grass" leaves
        // exactly one survivor for each of the four hypotheses
        let catalog = catalog_of(&["glass", "grass", "brass", "class"]);
        let by_grass = expected_remaining(&catalog, &word("grass"));
        let by_fuzzy = expected_remaining(&catalog, &word("fuzzy"));
        assert!((by_grass - 1.0).abs() < 1e-9);
        assert!((by_fuzzy - 4.0).abs() < 1e-9);
    }

    #[test]
    fn bounded_by_pool_size() {
        let catalog = catalog_of(&["alpha", "allot", "apple", "adieu", "amber", "glass"]);
        for candidate in &catalog {
            let expected = expected_remaining(&catalog, &candidate.word);
            assert!(expected >= 1.0);
            assert!(expected <= catalog.len() as f64);
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let catalog = catalog_of(&["alpha", "allot", "apple", "adieu", "amber"]);
        let first = expected_remaining(&catalog, &word("apple"));
        let second = expected_remaining(&catalog, &word("apple"));
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
