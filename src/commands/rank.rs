//! One-shot ranking after a sequence of feedback lines

use crate::core::Catalog;
use crate::solver::{Ranking, Session, SuggestConfig};
use anyhow::{Context, Result};

/// Apply each feedback line in order, then rank what is left
///
/// # Errors
/// Fails on the first line that is malformed, contradicts earlier lines or
/// arrives after the answer is already determined.
///
/// # Examples
/// ```
/// use wordle_suggest::commands::rank_after_feedback;
/// use wordle_suggest::core::Catalog;
/// use wordle_suggest::solver::SuggestConfig;
///
/// let catalog = Catalog::from_pairs(
///     [("alpha", 1), ("allot", 1), ("apple", 1), ("adieu", 1), ("amber", 1)],
///     0,
/// );
/// let lines = ["+a -l -p -h -a".to_string()];
/// let ranking = rank_after_feedback(catalog, &lines, SuggestConfig::default()).unwrap();
/// assert_eq!(ranking.total_candidates, 2);
/// ```
pub fn rank_after_feedback(
    catalog: Catalog,
    lines: &[String],
    config: SuggestConfig,
) -> Result<Ranking> {
    let mut session = Session::new(catalog, config);
    for (i, line) in lines.iter().enumerate() {
        session
            .submit_line(line)
            .with_context(|| format!("feedback #{} '{line}'", i + 1))?;
    }
    Ok(session.suggest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::suggest;

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

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn no_feedback_ranks_whole_catalog() {
        let config = SuggestConfig::default();
        let ranking = rank_after_feedback(scenario(), &[], config).unwrap();
        assert_eq!(ranking, suggest(&scenario(), &config));
    }

    #[test]
    fn feedback_narrows_ranking() {
        let ranking =
            rank_after_feedback(scenario(), &lines(&["+a -l -p -h -a"]), SuggestConfig::default())
                .unwrap();
        let mut words: Vec<&str> = ranking.suggestions.iter().map(|s| s.word.text()).collect();
        words.sort_unstable();
        assert_eq!(words, ["adieu", "amber"]);
    }

    #[test]
    fn malformed_line_names_its_position() {
        let err = rank_after_feedback(
            scenario(),
            &lines(&["+a -l -p -h -a", "+a -l"]),
            SuggestConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("feedback #2"));
    }

    #[test]
    fn contradiction_is_error() {
        let result = rank_after_feedback(
            scenario(),
            &lines(&["+a -l -p -h -a", "-a -d -i -e -u"]),
            SuggestConfig::default(),
        );
        assert!(result.is_err());
    }
}
