//! Candidate pruning and guess ranking
//!
//! `filter` prunes the pool against a constraint model, `heuristic` scores
//! words cheaply, `expected` estimates how far a guess would shrink the
//! pool, and `suggest` combines the two into a ranking. `session` drives
//! the loop for one game.

pub mod expected;
pub mod filter;
pub mod heuristic;
pub mod session;
pub mod suggest;

pub use expected::expected_remaining;
pub use filter::{count_matching, filter, satisfies};
pub use heuristic::{PositionRanks, Scored, letter_histogram, rank_by_heuristic, score_catalog};
pub use session::{Session, SessionError, SessionState, Turn};
pub use suggest::{Ranking, SuggestConfig, Suggestion, suggest};
