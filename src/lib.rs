//! Word Guess Suggester
//!
//! Recommends guesses for a five-letter word game. Feedback narrows a pool
//! of candidate words; the survivors are ranked by a positional letter
//! heuristic and then by how many candidates each guess is expected to
//! leave behind.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_suggest::core::Catalog;
//! use wordle_suggest::solver::{Session, SuggestConfig};
//!
//! let catalog = Catalog::from_pairs(
//!     [("alpha", 50), ("allot", 40), ("apple", 30), ("adieu", 20), ("amber", 10)],
//!     0,
//! );
//! let mut session = Session::new(catalog, SuggestConfig::default());
//!
//! session.submit_line("+a -l -p -h -a").unwrap();
//! let ranking = session.suggest();
//! assert_eq!(ranking.total_candidates, 2);
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and ranking
pub mod solver;

// Word/frequency lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
