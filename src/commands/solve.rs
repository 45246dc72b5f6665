//! Simulated play against a known answer
//!
//! The answer is hidden from the ranking: each turn takes the most
//! preferred suggestion (or the forced first guess), derives the feedback
//! the game would give, and prunes the pool with it.

use crate::core::{Catalog, ConstraintModel, Feedback, Word, diff};
use crate::solver::{SuggestConfig, expected_remaining, filter, suggest};
use anyhow::{Context, Result};
use log::{debug, warn};

/// What to simulate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub target: String,
    /// Played as the first guess instead of the top suggestion
    pub first_guess: Option<String>,
    /// Give up after this many guesses (default: no limit)
    pub max_guesses: Option<usize>,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            first_guess: None,
            max_guesses: None,
        }
    }

    #[must_use]
    pub fn with_first_guess(mut self, first_guess: Option<String>) -> Self {
        self.first_guess = first_guess;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: Option<usize>) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// One simulated guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub expected_remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub target: String,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

impl SimulationResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Play the catalog against `config.target` until solved or out of options
///
/// Running out of candidates or hitting `max_guesses` ends the run with
/// `success == false`; it is not an error.
///
/// # Errors
/// Returns an error if the target or the forced first guess is not a valid
/// five-letter word.
///
/// # Examples
/// ```
/// use wordle_suggest::commands::{SimulationConfig, simulate};
/// use wordle_suggest::core::Catalog;
/// use wordle_suggest::solver::SuggestConfig;
///
/// let catalog = Catalog::from_pairs(
///     [("alpha", 5), ("allot", 4), ("apple", 3), ("adieu", 2), ("amber", 1)],
///     0,
/// );
/// let config = SimulationConfig::new("amber".to_string());
/// let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();
///
/// assert!(result.success);
/// assert_eq!(result.steps.last().unwrap().word, "amber");
/// ```
pub fn simulate(
    catalog: &Catalog,
    config: &SimulationConfig,
    suggest_config: &SuggestConfig,
) -> Result<SimulationResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    let mut forced = config
        .first_guess
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid first guess")?;

    if !catalog.contains(&target) {
        warn!("target '{target}' is not in the word list; it cannot be found");
    }

    let mut pool = catalog.clone();
    let mut steps = Vec::new();
    let mut success = false;

    while config.max_guesses.is_none_or(|max| steps.len() < max) {
        let candidates_before = pool.len();

        let (guess, expected) = if let Some(word) = forced.take() {
            let expected = expected_remaining(&pool, &word);
            (word, expected)
        } else {
            let ranking = suggest(&pool, suggest_config);
            let Some(best) = ranking.suggestions.into_iter().next() else {
                warn!("no candidates left for '{target}'");
                break;
            };
            (best.word, best.expected_remaining)
        };

        let feedback = diff(&guess, &target);
        let model = ConstraintModel::from_feedback(&feedback)
            .with_context(|| format!("feedback {feedback} is inconsistent"))?;
        filter(&model, &mut pool);
        debug!("{guess}: {feedback} ({candidates_before} -> {})", pool.len());

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: pool.len(),
            expected_remaining: expected,
        });

        if feedback.is_solved() {
            success = true;
            break;
        }
    }

    Ok(SimulationResult {
        target: config.target.clone(),
        success,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::wordlists::{LoadOptions, default_catalog};

    fn scenario() -> Catalog {
        Catalog::from_pairs(
            [
                ("alpha", 50),
                ("allot", 40),
                ("apple", 30),
                ("adieu", 20),
                ("amber", 10),
            ],
            0,
        )
    }

    #[test]
    fn solves_every_catalog_word() {
        let catalog = scenario();
        for candidate in &catalog {
            let config = SimulationConfig::new(candidate.word.text().to_string());
            let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();
            assert!(result.success, "failed on {}", candidate.word);
            assert!(result.guess_count() <= catalog.len());
        }
    }

    #[test]
    fn records_shrinking_pool() {
        let catalog = default_catalog(&LoadOptions::default());
        let config = SimulationConfig::new("glass".to_string());
        let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.steps[0].candidates_before, catalog.len());
        for pair in result.steps.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
        for step in &result.steps {
            assert!(step.candidates_after < step.candidates_before || step.feedback.is_solved());
        }
        assert!(result.steps.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn forced_first_guess_is_played() {
        let catalog = scenario();
        let config = SimulationConfig::new("amber".to_string())
            .with_first_guess(Some("adieu".to_string()));
        let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();

        assert_eq!(result.steps[0].word, "adieu");
        assert_eq!(
            result.steps[0].feedback.marks(),
            &[Mark::Exact, Mark::Absent, Mark::Absent, Mark::Exact, Mark::Absent]
        );
        assert!(result.success);
    }

    #[test]
    fn forced_guess_outside_catalog_is_allowed() {
        let catalog = scenario();
        let config = SimulationConfig::new("apple".to_string())
            .with_first_guess(Some("crane".to_string()));
        let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();
        assert_eq!(result.steps[0].word, "crane");
        assert!(result.success);
    }

    #[test]
    fn max_guesses_stops_early() {
        let catalog = scenario();
        let config = SimulationConfig::new("amber".to_string())
            .with_first_guess(Some("crane".to_string()))
            .with_max_guesses(Some(1));
        let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();
        assert_eq!(result.guess_count(), 1);
        assert!(!result.success);
    }

    #[test]
    fn unknown_target_exhausts_pool() {
        let catalog = scenario();
        let config = SimulationConfig::new("zebra".to_string());
        let result = simulate(&catalog, &config, &SuggestConfig::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.steps.last().unwrap().candidates_after, 0);
    }

    #[test]
    fn invalid_words_are_errors() {
        let catalog = scenario();
        assert!(simulate(&catalog, &SimulationConfig::new("amb".to_string()), &SuggestConfig::default()).is_err());

        let config = SimulationConfig::new("amber".to_string()).with_first_guess(Some("12345".to_string()));
        assert!(simulate(&catalog, &config, &SuggestConfig::default()).is_err());
    }
}
