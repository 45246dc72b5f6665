//! Word analysis command
//!
//! Scores one word against the current pool the same way the ranking
//! does, without the shortlist cut-off.

use crate::core::{Catalog, Word};
use crate::solver::{PositionRanks, expected_remaining, rank_by_heuristic};
use anyhow::{Context, Result};

/// How one word fares as a guess against a pool
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub in_catalog: bool,
    pub frequency: Option<u64>,
    pub heuristic_score: u32,
    /// 1-based position among catalog words by heuristic score, if listed
    pub heuristic_rank: Option<usize>,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze `word` as a guess against `catalog`
///
/// Words outside the catalog can still be analyzed; they just have no
/// frequency or heuristic rank.
///
/// # Errors
/// Returns an error if `word` is not a valid five-letter word.
pub fn analyze_word(word: &str, catalog: &Catalog) -> Result<AnalysisResult> {
    let parsed = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    let ranks = PositionRanks::from_catalog(catalog);
    let heuristic_score = ranks.score(&parsed);

    let heuristic_rank = rank_by_heuristic(catalog)
        .iter()
        .position(|s| s.candidate.word == parsed)
        .map(|i| i + 1);

    let frequency = catalog.find(parsed.text()).map(|c| c.frequency);

    Ok(AnalysisResult {
        word: parsed.text().to_string(),
        in_catalog: frequency.is_some(),
        frequency,
        heuristic_score,
        heuristic_rank,
        expected_remaining: expected_remaining(catalog, &parsed),
        total_candidates: catalog.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Catalog {
        Catalog::from_pairs(
            [("glass", 40), ("grass", 30), ("brass", 20), ("class", 10)],
            0,
        )
    }

    #[test]
    fn analyze_catalog_word() {
        let result = analyze_word("grass", &pool()).unwrap();
        assert_eq!(result.word, "grass");
        assert!(result.in_catalog);
        assert_eq!(result.frequency, Some(30));
        assert_eq!(result.total_candidates, 4);
        assert!((result.expected_remaining - 1.0).abs() < 1e-9);
        assert!(result.heuristic_rank.is_some_and(|r| (1..=4).contains(&r)));
    }

    #[test]
    fn analyze_outside_word() {
        let result = analyze_word("fuzzy", &pool()).unwrap();
        assert!(!result.in_catalog);
        assert_eq!(result.frequency, None);
        assert_eq!(result.heuristic_rank, None);
        assert!((result.expected_remaining - 4.0).abs() < 1e-9);
    }

    #[test]
    fn uppercase_is_normalized() {
        let result = analyze_word("GLASS", &pool()).unwrap();
        assert_eq!(result.word, "glass");
        assert!(result.in_catalog);
    }

    #[test]
    fn invalid_word_is_error() {
        assert!(analyze_word("gl4ss", &pool()).is_err());
        assert!(analyze_word("toolong", &pool()).is_err());
    }

    #[test]
    fn heuristic_rank_matches_score_order() {
        let catalog = pool();
        let mut ranked: Vec<(usize, u32)> = catalog
            .iter()
            .map(|c| {
                let r = analyze_word(c.word.text(), &catalog).unwrap();
                (r.heuristic_rank.unwrap(), r.heuristic_score)
            })
            .collect();
        ranked.sort_unstable();
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(ranked.iter().map(|r| r.0).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }
}
