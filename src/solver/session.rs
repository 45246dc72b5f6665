//! Solving session: suggest, read feedback, filter, repeat
//!
//! ```text
//! AwaitingGuess --suggest--> AwaitingFeedback --feedback--> AwaitingGuess
//!                                                       \--> Solved(word)
//! ```
//!
//! `Exhausted` is only reachable from an empty starting catalog; feedback
//! that would empty the pool is rejected instead of committed.

use super::filter::{count_matching, filter};
use super::suggest::{Ranking, SuggestConfig, suggest};
use crate::core::{Catalog, ConstraintModel, Contradiction, Feedback, FeedbackError, Word};
use log::debug;
use thiserror::Error;

/// Why a feedback event was rejected
///
/// A rejected event leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("malformed feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("inconsistent feedback: {0}")]
    Inconsistent(#[from] Contradiction),
    #[error("no candidate is consistent with this feedback ({before} were left)")]
    NoCandidates { before: usize },
    #[error("session is already finished")]
    Finished,
}

impl SessionError {
    /// Whether the input was well-formed but contradicts what is known
    #[must_use]
    pub const fn is_contradiction(&self) -> bool {
        matches!(self, Self::Inconsistent(_) | Self::NoCandidates { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    AwaitingFeedback,
    Solved(Word),
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Solved(_) | Self::Exhausted)
    }
}

/// One committed feedback event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    pub before: usize,
    pub after: usize,
}

/// A solving session over one catalog
#[derive(Debug, Clone)]
pub struct Session {
    initial: Catalog,
    catalog: Catalog,
    model: ConstraintModel,
    config: SuggestConfig,
    state: SessionState,
    history: Vec<Turn>,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Catalog, config: SuggestConfig) -> Self {
        let state = Self::settle(&catalog);
        Self {
            initial: catalog.clone(),
            catalog,
            model: ConstraintModel::new(),
            config,
            state,
            history: Vec::new(),
        }
    }

    /// State implied by the pool size alone
    fn settle(catalog: &Catalog) -> SessionState {
        match catalog.as_slice() {
            [] => SessionState::Exhausted,
            [only] => SessionState::Solved(only.word.clone()),
            _ => SessionState::AwaitingGuess,
        }
    }

    /// Start over from the catalog the session was created with
    pub fn restart(&mut self) {
        self.catalog = self.initial.clone();
        self.model.reset();
        self.history.clear();
        self.state = Self::settle(&self.catalog);
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub const fn candidates(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.catalog.len()
    }

    /// Constraints derived from the most recent feedback
    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Rank the current pool
    ///
    /// Moves an `AwaitingGuess` session to `AwaitingFeedback`; finished
    /// sessions keep their state.
    pub fn suggest(&mut self) -> Ranking {
        let ranking = suggest(&self.catalog, &self.config);
        if self.state == SessionState::AwaitingGuess {
            self.state = SessionState::AwaitingFeedback;
        }
        ranking
    }

    /// Parse an operator-typed line and apply it
    ///
    /// # Errors
    /// See [`Session::apply_feedback`]; malformed lines give
    /// `SessionError::InvalidFeedback`.
    pub fn submit_line(&mut self, line: &str) -> Result<&Turn, SessionError> {
        let feedback = Feedback::parse(line)?;
        self.apply_feedback(feedback)
    }

    /// Apply one feedback event
    ///
    /// The constraint model is rebuilt from this feedback alone; earlier
    /// knowledge lives on in the already-pruned catalog. Nothing is
    /// committed unless at least one candidate survives.
    ///
    /// # Errors
    /// - `Finished` if the session is solved or exhausted
    /// - `Inconsistent` if the feedback contradicts itself
    /// - `NoCandidates` if no remaining candidate matches
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::Catalog;
    /// use wordle_suggest::solver::{Session, SessionState, SuggestConfig};
    ///
    /// let catalog = Catalog::from_pairs(
    ///     [("alpha", 1), ("allot", 1), ("apple", 1), ("adieu", 1), ("amber", 1)],
    ///     0,
    /// );
    /// let mut session = Session::new(catalog, SuggestConfig::default());
    ///
    /// let turn = session.submit_line("+a -l -p -h -a").unwrap();
    /// assert_eq!((turn.before, turn.after), (5, 2));
    ///
    /// session.submit_line("+a +m +b +e +r").unwrap();
    /// assert_eq!(session.state().clone(), SessionState::Solved("amber".parse().unwrap()));
    /// ```
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<&Turn, SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::Finished);
        }

        let model = ConstraintModel::from_feedback(&feedback)?;
        let before = self.catalog.len();
        if count_matching(&model, &self.catalog) == 0 {
            return Err(SessionError::NoCandidates { before });
        }

        filter(&model, &mut self.catalog);
        self.model = model;
        let after = self.catalog.len();
        debug!("{feedback}: {before} -> {after} candidates");

        self.state = match self.catalog.as_slice() {
            [only] => SessionState::Solved(only.word.clone()),
            _ => SessionState::AwaitingGuess,
        };
        self.history.push(Turn {
            feedback,
            before,
            after,
        });
        Ok(&self.history[self.history.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn texts(session: &Session) -> Vec<&str> {
        session.candidates().iter().map(|c| c.word.text()).collect()
    }

    #[test]
    fn starts_awaiting_guess() {
        let session = Session::new(scenario(), SuggestConfig::default());
        assert_eq!(session.state(), &SessionState::AwaitingGuess);
        assert_eq!(session.remaining(), 5);
        assert!(session.history().is_empty());
        assert!(session.model().is_empty());
    }

    #[test]
    fn suggest_awaits_feedback() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        let ranking = session.suggest();
        assert_eq!(ranking.total_candidates, 5);
        assert_eq!(session.state(), &SessionState::AwaitingFeedback);
    }

    #[test]
    fn fresh_session_ranks_full_catalog() {
        let catalog = scenario();
        let config = SuggestConfig::default();
        let mut session = Session::new(catalog.clone(), config);
        assert_eq!(session.suggest(), suggest(&catalog, &config));
    }

    #[test]
    fn feedback_prunes_catalog() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.suggest();
        let turn = session.submit_line("+a -l -p -h -a").unwrap().clone();
        assert_eq!(turn.before, 5);
        assert_eq!(turn.after, 2);
        assert_eq!(texts(&session), ["adieu", "amber"]);
        assert_eq!(session.state(), &SessionState::AwaitingGuess);
        assert_eq!(session.history(), [turn]);
    }

    #[test]
    fn single_survivor_solves() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.submit_line("+a -l -p -h -a").unwrap();
        session.submit_line("+a -d -i +e -u").unwrap();
        assert_eq!(
            session.state(),
            &SessionState::Solved(Word::new("amber").unwrap())
        );
        assert!(session.is_finished());
    }

    #[test]
    fn all_exact_solves() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.submit_line("+a +p +p +l +e").unwrap();
        assert_eq!(
            session.state(),
            &SessionState::Solved(Word::new("apple").unwrap())
        );
    }

    #[test]
    fn malformed_line_leaves_session_untouched() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.submit_line("+a -l -p -h -a").unwrap();
        let before = (texts(&session).len(), *session.model());

        let err = session.submit_line("+a -l").unwrap_err();
        assert_eq!(err, SessionError::InvalidFeedback(FeedbackError::WrongTokenCount(2)));
        assert!(!err.is_contradiction());
        assert_eq!((texts(&session).len(), *session.model()), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn contradiction_is_reported_and_not_committed() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.submit_line("+a -l -p -h -a").unwrap();
        let model = *session.model();

        // 'a' was confirmed first, now claimed absent
        let err = session.submit_line("-a -d -i -e -u").unwrap_err();
        assert_eq!(err, SessionError::NoCandidates { before: 2 });
        assert!(err.is_contradiction());
        assert_eq!(texts(&session), ["adieu", "amber"]);
        assert_eq!(session.model(), &model);
        assert_eq!(session.state(), &SessionState::AwaitingGuess);
    }

    #[test]
    fn inconsistent_constraints_map_to_contradiction() {
        let err = SessionError::from(Contradiction::PresentAndAbsent { letter: 'a' });
        assert!(err.is_contradiction());
        assert_eq!(err.to_string(), "inconsistent feedback: 'a' is marked both present and absent");
    }

    #[test]
    fn finished_session_rejects_feedback() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.submit_line("+a +p +p +l +e").unwrap();
        assert_eq!(
            session.submit_line("+a +p +p +l +e").unwrap_err(),
            SessionError::Finished
        );
    }

    #[test]
    fn empty_catalog_is_exhausted() {
        let mut session = Session::new(Catalog::default(), SuggestConfig::default());
        assert_eq!(session.state(), &SessionState::Exhausted);
        let ranking = session.suggest();
        assert!(ranking.is_empty());
        assert_eq!(ranking.total_candidates, 0);
        assert_eq!(session.state(), &SessionState::Exhausted);
    }

    #[test]
    fn single_word_catalog_starts_solved() {
        let session = Session::new(
            Catalog::from_pairs([("amber", 1)], 0),
            SuggestConfig::default(),
        );
        assert_eq!(
            session.state(),
            &SessionState::Solved(Word::new("amber").unwrap())
        );
    }

    #[test]
    fn restart_restores_initial_pool() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        session.suggest();
        session.submit_line("+a -l -p -h -a").unwrap();
        session.restart();
        assert_eq!(session.remaining(), 5);
        assert!(session.history().is_empty());
        assert!(session.model().is_empty());
        assert_eq!(session.state(), &SessionState::AwaitingGuess);
    }

    #[test]
    fn pool_never_grows() {
        let mut session = Session::new(scenario(), SuggestConfig::default());
        let mut last = session.remaining();
        for line in ["-x -y -z -q -w", "+a -l -p -h -a", "+a -q -q -q -q"] {
            if session.submit_line(line).is_ok() {
                assert!(session.remaining() <= last);
                last = session.remaining();
            }
        }
        assert_eq!(last, 2);
    }
}
