//! Candidate filtering against a constraint model

use crate::core::{Catalog, ConstraintModel, LetterSet, Word};

/// Whether `word` is consistent with everything in `model`
///
/// Checks, short-circuiting on the first failure:
/// - fixed positions hold their letter
/// - no free position holds a letter excluded there
/// - no forbidden letter appears anywhere
/// - every required letter appears at some free position
///
/// A free position is one the model does not fix.
#[inline]
#[must_use]
pub fn satisfies(model: &ConstraintModel, word: &Word) -> bool {
    let mut free_letters = LetterSet::EMPTY;

    for (position, (&letter, fixed)) in word.chars().iter().zip(model.fixed()).enumerate() {
        match *fixed {
            Some(want) if want != letter => return false,
            Some(_) => {}
            None => {
                if model.excluded_at(position).contains(letter) {
                    return false;
                }
                free_letters.insert(letter);
            }
        }
    }

    !model.must_not_contain().intersects(word.letters())
        && free_letters.contains_all(model.must_contain())
}

/// Remove every candidate inconsistent with `model`, preserving order
///
/// Returns the number of candidates removed.
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Catalog, ConstraintModel, Feedback};
/// use wordle_suggest::solver::filter;
///
/// let mut catalog = Catalog::from_pairs(
///     [("alpha", 1), ("allot", 1), ("apple", 1), ("adieu", 1), ("amber", 1)],
///     0,
/// );
/// let model = ConstraintModel::from_feedback(&Feedback::parse("+a -l -p -h -a").unwrap()).unwrap();
///
/// filter(&model, &mut catalog);
/// let left: Vec<&str> = catalog.iter().map(|c| c.word.text()).collect();
/// assert_eq!(left, ["adieu", "amber"]);
/// ```
pub fn filter(model: &ConstraintModel, catalog: &mut Catalog) -> usize {
    catalog.retain(|candidate| satisfies(model, &candidate.word))
}

/// Number of candidates that would survive `model`
#[must_use]
pub fn count_matching(model: &ConstraintModel, catalog: &Catalog) -> usize {
    catalog
        .iter()
        .filter(|candidate| satisfies(model, &candidate.word))
        .count()
}
