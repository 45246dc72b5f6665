//! Letter-by-letter feedback for a guess
//!
//! Feedback is what the game reports after a guess: for each position the
//! guessed letter together with one of three marks:
//! - `+` exact: the letter is at this position
//! - `~` misplaced: the letter is in the answer, elsewhere
//! - `-` absent: no further occurrence of the letter in the answer
//!
//! It is produced either by comparing a guess with a (real or hypothetical)
//! answer, or by parsing an operator-typed line such as `+a -l ~p -h -a`.

use super::{ALPHABET_LEN, WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback mark for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Misplaced,
    Absent,
}

impl Mark {
    /// Operator character used in feedback lines
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Misplaced => '~',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn from_symbol(op: char) -> Option<Self> {
        match op {
            '+' => Some(Self::Exact),
            '~' => Some(Self::Misplaced),
            '-' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Why a feedback line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected 5 fields, got {0}")]
    WrongTokenCount(usize),
    #[error("field {} '{token}' must be exactly 2 characters", index + 1)]
    WrongTokenLength { index: usize, token: String },
    #[error("field {}: unknown operator '{op}' (expected +, ~ or -)", index + 1)]
    UnknownOperator { index: usize, op: char },
    #[error("field {}: '{letter}' is not a lowercase letter a-z", index + 1)]
    InvalidLetter { index: usize, letter: char },
}

/// Feedback for one guess: the guessed letters and their marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: [u8; WORD_LEN],
    marks: [Mark; WORD_LEN],
}

impl Feedback {
    /// Build feedback from letters and marks
    ///
    /// Letters must be lowercase ASCII; `Word` and the parsers guarantee it.
    #[must_use]
    pub const fn new(letters: [u8; WORD_LEN], marks: [Mark; WORD_LEN]) -> Self {
        Self { letters, marks }
    }

    /// Compare `guess` against `answer`
    ///
    /// Exact matches are marked first and consume their occurrence of the
    /// letter in the answer. Remaining positions are then scanned left to
    /// right; each one claims an unconsumed occurrence of its letter if one
    /// is left (misplaced), otherwise it is absent. A guess with two `s`
    /// against an answer with one `s` therefore gets one `~s` and one `-s`.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{Feedback, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let answer = Word::new("glass").unwrap();
    /// let feedback = Feedback::diff(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "~s ~a -s +s -y");
    /// ```
    #[must_use]
    // Allow: index needed to compare guess[i] with answer[i] and set marks[i]
    #[allow(clippy::needless_range_loop)]
    pub fn diff(guess: &Word, answer: &Word) -> Self {
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut unclaimed = [0u8; ALPHABET_LEN];

        for i in 0..WORD_LEN {
            if guess_chars[i] == answer_chars[i] {
                marks[i] = Mark::Exact;
            } else {
                unclaimed[usize::from(answer_chars[i] - b'a')] += 1;
            }
        }

        for i in 0..WORD_LEN {
            if marks[i] == Mark::Exact {
                continue;
            }
            let slot = &mut unclaimed[usize::from(guess_chars[i] - b'a')];
            if *slot > 0 {
                *slot -= 1;
                marks[i] = Mark::Misplaced;
            }
        }

        Self {
            letters: *guess_chars,
            marks,
        }
    }

    /// Parse a feedback line of five whitespace-separated tokens
    ///
    /// Each token is an operator (`+`, `~`, `-`) followed by a lowercase
    /// letter, in guess order.
    ///
    /// # Errors
    /// Returns `FeedbackError` describing the first malformed part of the line.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("+a -l -p -h -a").unwrap();
    /// assert_eq!(feedback.marks()[0], Mark::Exact);
    /// assert_eq!(feedback.guess_text(), "alpha");
    ///
    /// assert!(Feedback::parse("+a -l -p").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, FeedbackError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != WORD_LEN {
            return Err(FeedbackError::WrongTokenCount(tokens.len()));
        }

        let mut letters = [0u8; WORD_LEN];
        let mut marks = [Mark::Absent; WORD_LEN];

        for (index, token) in tokens.iter().enumerate() {
            let &[op, letter] = token.as_bytes() else {
                return Err(FeedbackError::WrongTokenLength {
                    index,
                    token: (*token).to_string(),
                });
            };
            let op = char::from(op);
            marks[index] =
                Mark::from_symbol(op).ok_or(FeedbackError::UnknownOperator { index, op })?;
            if !letter.is_ascii_lowercase() {
                return Err(FeedbackError::InvalidLetter {
                    index,
                    letter: char::from(letter),
                });
            }
            letters[index] = letter;
        }

        Ok(Self { letters, marks })
    }

    /// Combine a known guess with a compact pattern of five mark characters
    ///
    /// Accepts `+`/`g`/`G` for exact, `~`/`y`/`Y` for misplaced and
    /// `-`/`_` for absent.
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongTokenCount` if the pattern does not have
    /// exactly five characters, `FeedbackError::UnknownOperator` for any
    /// other character.
    pub fn from_pattern(guess: &Word, pattern: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = pattern.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(FeedbackError::WrongTokenCount(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (index, &op) in chars.iter().enumerate() {
            marks[index] = match op {
                'g' | 'G' => Mark::Exact,
                'y' | 'Y' => Mark::Misplaced,
                '_' => Mark::Absent,
                _ => Mark::from_symbol(op).ok_or(FeedbackError::UnknownOperator { index, op })?,
            };
        }

        Ok(Self {
            letters: *guess.chars(),
            marks,
        })
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// `(position, mark, letter)` triples in guess order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark, u8)> + '_ {
        self.marks
            .iter()
            .zip(self.letters.iter())
            .enumerate()
            .map(|(i, (&mark, &letter))| (i, mark, letter))
    }

    /// Whether every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Whether `letter` carries `mark` at any position
    #[must_use]
    pub fn has_mark_for(&self, letter: u8, mark: Mark) -> bool {
        self.iter().any(|(_, m, l)| m == mark && l == letter)
    }

    /// The guessed word spelled by the feedback letters
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Render the marks as colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Misplaced => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mark, letter) in self.iter() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", mark.symbol(), char::from(letter))?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Feedback the game would give for `guess` if the answer were `answer`
#[must_use]
pub fn diff(guess: &Word, answer: &Word) -> Feedback {
    Feedback::diff(guess, answer)
}

/// Parse an operator-typed feedback line
///
/// # Errors
/// See [`Feedback::parse`].
pub fn parse_feedback(line: &str) -> Result<Feedback, FeedbackError> {
    Feedback::parse(line)
}
