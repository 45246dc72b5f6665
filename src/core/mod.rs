//! Core domain types for the word game
//!
//! This module contains the fundamental domain types: words, letter sets,
//! feedback, the constraint model and the candidate catalog. None of them
//! perform I/O.

mod catalog;
mod constraints;
mod feedback;
mod letters;
mod word;

pub use catalog::{Candidate, Catalog};
pub(crate) use catalog::CatalogBuilder;
pub use constraints::{ConstraintModel, Contradiction};
pub use feedback::{Feedback, FeedbackError, Mark, diff, parse_feedback};
pub use letters::LetterSet;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet (`a`..=`z`)
pub const ALPHABET_LEN: usize = 26;
