//! Accumulated knowledge about the unknown answer
//!
//! The model is a plain `Copy` value: cheap to reset and cheap to give each
//! worker its own instance when hypotheses are evaluated in parallel.

use super::{Feedback, LetterSet, Mark, WORD_LEN};
use thiserror::Error;

/// Constraint updates that would make the model self-contradictory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Contradiction {
    #[error("position {} cannot be both '{existing}' and '{letter}'", position + 1)]
    ConflictingFixed {
        position: usize,
        existing: char,
        letter: char,
    },
    #[error("'{letter}' is both confirmed and excluded at position {}", position + 1)]
    FixedAndExcluded { position: usize, letter: char },
    #[error("'{letter}' is marked both present and absent")]
    PresentAndAbsent { letter: char },
}

/// Everything known about the answer from feedback so far
///
/// Invariants, enforced by the mutators:
/// - a letter is never in both `must_contain` and `must_not_contain`
/// - a position fixed to a letter never also excludes that letter
/// - a fixed letter is never in `must_not_contain`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintModel {
    fixed: [Option<u8>; WORD_LEN],
    excluded_at: [LetterSet; WORD_LEN],
    must_contain: LetterSet,
    must_not_contain: LetterSet,
}

impl ConstraintModel {
    /// An empty model (no knowledge)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a single feedback
    ///
    /// # Errors
    /// Returns `Contradiction` if the feedback is internally inconsistent.
    pub fn from_feedback(feedback: &Feedback) -> Result<Self, Contradiction> {
        let mut model = Self::new();
        model.apply(feedback)?;
        Ok(model)
    }

    /// Forget everything
    pub fn reset(&mut self) {
        self.fixed = [None; WORD_LEN];
        for set in &mut self.excluded_at {
            set.clear();
        }
        self.must_contain.clear();
        self.must_not_contain.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &[Option<u8>; WORD_LEN] {
        &self.fixed
    }

    #[inline]
    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    #[inline]
    #[must_use]
    pub const fn must_contain(&self) -> LetterSet {
        self.must_contain
    }

    #[inline]
    #[must_use]
    pub const fn must_not_contain(&self) -> LetterSet {
        self.must_not_contain
    }

    fn is_fixed_anywhere(&self, letter: u8) -> bool {
        self.fixed.contains(&Some(letter))
    }

    /// Record that `position` is exactly `letter`
    ///
    /// # Errors
    /// Fails if the position is fixed to another letter, excludes this
    /// letter, or the letter is known to be absent.
    pub fn fix(&mut self, position: usize, letter: u8) -> Result<(), Contradiction> {
        match self.fixed[position] {
            Some(existing) if existing != letter => {
                return Err(Contradiction::ConflictingFixed {
                    position,
                    existing: char::from(existing),
                    letter: char::from(letter),
                });
            }
            _ => {}
        }
        if self.excluded_at[position].contains(letter) {
            return Err(Contradiction::FixedAndExcluded {
                position,
                letter: char::from(letter),
            });
        }
        if self.must_not_contain.contains(letter) {
            return Err(Contradiction::PresentAndAbsent {
                letter: char::from(letter),
            });
        }
        self.fixed[position] = Some(letter);
        Ok(())
    }

    /// Record that `letter` does not occupy `position`
    ///
    /// # Errors
    /// Fails if the position is fixed to that letter.
    pub fn exclude_at(&mut self, position: usize, letter: u8) -> Result<(), Contradiction> {
        if self.fixed[position] == Some(letter) {
            return Err(Contradiction::FixedAndExcluded {
                position,
                letter: char::from(letter),
            });
        }
        self.excluded_at[position].insert(letter);
        Ok(())
    }

    /// Record that `letter` occurs somewhere in the answer
    ///
    /// # Errors
    /// Fails if the letter is known to be absent.
    pub fn require(&mut self, letter: u8) -> Result<(), Contradiction> {
        if self.must_not_contain.contains(letter) {
            return Err(Contradiction::PresentAndAbsent {
                letter: char::from(letter),
            });
        }
        self.must_contain.insert(letter);
        Ok(())
    }

    /// Record that `letter` does not occur in the answer at all
    ///
    /// # Errors
    /// Fails if the letter is required or fixed at some position.
    pub fn forbid(&mut self, letter: u8) -> Result<(), Contradiction> {
        if self.must_contain.contains(letter) || self.is_fixed_anywhere(letter) {
            return Err(Contradiction::PresentAndAbsent {
                letter: char::from(letter),
            });
        }
        self.must_not_contain.insert(letter);
        Ok(())
    }

    /// Fold one feedback into the model
    ///
    /// Exact marks are applied first, then misplaced, then absent, so an
    /// absent mark can see how many occurrences the same guess already
    /// accounted for:
    /// - no exact or misplaced mark for the letter: the letter is absent
    /// - misplaced elsewhere: only this position is excluded
    /// - exact elsewhere only: every occurrence sits at an exact position,
    ///   so the letter is excluded from all other positions
    ///
    /// On error the model may be partially updated; callers reset it.
    ///
    /// # Errors
    /// Returns `Contradiction` if a mark conflicts with what is already known.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{ConstraintModel, Feedback};
    ///
    /// let feedback = Feedback::parse("+a -l -p -h -a").unwrap();
    /// let model = ConstraintModel::from_feedback(&feedback).unwrap();
    ///
    /// assert_eq!(model.fixed()[0], Some(b'a'));
    /// assert!(model.must_not_contain().contains(b'l'));
    /// assert!(!model.must_not_contain().contains(b'a'));
    /// assert!(model.excluded_at(3).contains(b'a'));
    /// ```
    pub fn apply(&mut self, feedback: &Feedback) -> Result<(), Contradiction> {
        for (i, mark, letter) in feedback.iter() {
            if mark == Mark::Exact {
                self.fix(i, letter)?;
            }
        }

        for (i, mark, letter) in feedback.iter() {
            if mark == Mark::Misplaced {
                self.exclude_at(i, letter)?;
                self.require(letter)?;
            }
        }

        for (i, mark, letter) in feedback.iter() {
            if mark != Mark::Absent {
                continue;
            }
            if feedback.has_mark_for(letter, Mark::Misplaced) {
                self.exclude_at(i, letter)?;
            } else if feedback.has_mark_for(letter, Mark::Exact) {
                for (j, other_mark, other_letter) in feedback.iter() {
                    if other_mark != Mark::Exact || other_letter != letter {
                        self.exclude_at(j, letter)?;
                    }
                }
            } else {
                self.forbid(letter)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_for(line: &str) -> ConstraintModel {
        ConstraintModel::from_feedback(&Feedback::parse(line).unwrap()).unwrap()
    }

    #[test]
    fn new_model_is_empty() {
        let model = ConstraintModel::new();
        assert!(model.is_empty());
        assert_eq!(model.fixed(), &[None; WORD_LEN]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut model = model_for("+a ~l -p -h -a");
        assert!(!model.is_empty());
        model.reset();
        assert!(model.is_empty());
    }

    #[test]
    fn exact_fixes_position() {
        let model = model_for("+c -r -a -n -e");
        assert_eq!(model.fixed()[0], Some(b'c'));
        assert_eq!(model.fixed()[1], None);
    }

    #[test]
    fn misplaced_excludes_position_and_requires_letter() {
        let model = model_for("-c ~r -a -n -e");
        assert!(model.excluded_at(1).contains(b'r'));
        assert!(!model.excluded_at(0).contains(b'r'));
        assert!(model.must_contain().contains(b'r'));
    }

    #[test]
    fn absent_without_other_marks_forbids_letter() {
        let model = model_for("-c ~r -a -n -e");
        for letter in [b'c', b'a', b'n', b'e'] {
            assert!(model.must_not_contain().contains(letter));
        }
        assert!(!model.must_not_contain().contains(b'r'));
    }

    #[test]
    fn absent_repeat_of_exact_letter_excludes_other_positions() {
        let model = model_for("+a -l -p -h -a");
        assert!(!model.must_not_contain().contains(b'a'));
        assert!(!model.excluded_at(0).contains(b'a'));
        for position in 1..WORD_LEN {
            assert!(model.excluded_at(position).contains(b'a'));
        }
    }

    #[test]
    fn absent_repeat_of_misplaced_letter_excludes_only_its_position() {
        // sassy against glass
        let model = model_for("~s ~a -s +s -y");
        assert_eq!(model.fixed()[3], Some(b's'));
        assert!(model.excluded_at(0).contains(b's'));
        assert!(model.excluded_at(2).contains(b's'));
        assert!(!model.excluded_at(4).contains(b's'));
        assert!(model.must_contain().contains(b's'));
        assert!(model.must_contain().contains(b'a'));
        assert!(!model.must_not_contain().contains(b's'));
        assert!(model.must_not_contain().contains(b'y'));
    }

    #[test]
    fn conflicting_fixed_letters_contradict() {
        let mut model = ConstraintModel::new();
        model.fix(0, b'a').unwrap();
        assert_eq!(
            model.fix(0, b'b'),
            Err(Contradiction::ConflictingFixed {
                position: 0,
                existing: 'a',
                letter: 'b'
            })
        );
        assert!(model.fix(0, b'a').is_ok());
    }

    #[test]
    fn fixed_and_absent_same_letter_contradicts() {
        let mut model = ConstraintModel::new();
        model.fix(2, b'a').unwrap();
        assert_eq!(
            model.forbid(b'a'),
            Err(Contradiction::PresentAndAbsent { letter: 'a' })
        );
        assert_eq!(
            model.exclude_at(2, b'a'),
            Err(Contradiction::FixedAndExcluded {
                position: 2,
                letter: 'a'
            })
        );
    }

    #[test]
    fn required_and_forbidden_contradict_both_ways() {
        let mut model = ConstraintModel::new();
        model.require(b'x').unwrap();
        assert!(model.forbid(b'x').is_err());

        let mut model = ConstraintModel::new();
        model.forbid(b'x').unwrap();
        assert!(model.require(b'x').is_err());
        assert!(model.fix(4, b'x').is_err());
    }

    #[test]
    fn accumulating_inconsistent_feedback_contradicts() {
        let mut model = model_for("+a -l -p -h -a");
        let later = Feedback::parse("-a -m -b -e -r").unwrap();
        assert_eq!(
            model.apply(&later),
            Err(Contradiction::PresentAndAbsent { letter: 'a' })
        );
    }

    #[test]
    fn accumulating_consistent_feedback_merges() {
        let mut model = model_for("+a -l -p -h -a");
        model.apply(&Feedback::parse("+a ~m -b -e -r").unwrap()).unwrap();
        assert_eq!(model.fixed()[0], Some(b'a'));
        assert!(model.must_contain().contains(b'm'));
        assert!(model.must_not_contain().contains(b'l'));
        assert!(model.must_not_contain().contains(b'r'));
    }
}
