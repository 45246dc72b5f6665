//! Benchmark command
//!
//! Runs the simulation over many targets and aggregates guess counts.

use super::solve::{SimulationConfig, simulate};
use crate::core::{Catalog, Word};
use crate::solver::SuggestConfig;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Aggregate result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guess counts of solved targets only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the catalog
///
/// Without a seed the first `count` words are taken in catalog order; with
/// one, a reproducible random sample.
#[must_use]
pub fn sample_targets(catalog: &Catalog, count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        None => catalog.iter().take(count).map(|c| c.word.clone()).collect(),
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            catalog
                .as_slice()
                .choose_multiple(&mut rng, count)
                .map(|c| c.word.clone())
                .collect()
        }
    }
}

/// Progress bar for `len` simulations
///
/// # Errors
/// Returns an error if the bar template is rejected.
pub fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Simulate every target and collect statistics
///
/// # Errors
/// Returns an error if `first_guess` is not a valid word.
pub fn run_benchmark(
    catalog: &Catalog,
    targets: &[Word],
    first_guess: Option<&str>,
    suggest_config: &SuggestConfig,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in targets {
        let config = SimulationConfig::new(target.text().to_string())
            .with_first_guess(first_guess.map(str::to_string));
        let result = simulate(catalog, &config, suggest_config)?;

        if result.success {
            let guesses = result.guess_count();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(result.target);
        }

        if solved > 0 {
            progress.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        progress.inc(1);
    }
    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
