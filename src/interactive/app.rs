//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::solver::{Ranking, Session, SessionError, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub ranking: Ranking,
    /// Word that compact patterns are applied to
    pub guess: Option<Word>,
    pub input_buffer: String,
    pub manual_word: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_solved: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.games_solved > 0).then(|| self.total_guesses as f64 / self.games_solved as f64)
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            ranking: Ranking::default(),
            guess: None,
            input_buffer: String::new(),
            manual_word: String::new(),
            input_mode: InputMode::Feedback,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Type feedback for the top suggestion, e.g. '+-~--', or a full line '+c -r ~a -n -e'",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// Recompute the ranking and pick up terminal states
    pub fn refresh(&mut self) {
        match self.session.state().clone() {
            SessionState::Solved(word) => {
                self.ranking = Ranking::default();
                self.guess = Some(word);
                self.input_mode = InputMode::Finished;
            }
            SessionState::Exhausted => {
                self.ranking = Ranking::default();
                self.guess = None;
                self.input_mode = InputMode::Finished;
                self.add_message("The word list is empty.", MessageStyle::Error);
            }
            SessionState::AwaitingGuess | SessionState::AwaitingFeedback => {
                self.ranking = self.session.suggest();
                self.guess = self.ranking.best().map(|s| s.word.clone());
            }
        }
    }

    /// Parse the input as a full feedback line or a compact pattern
    ///
    /// A line with whitespace is a full feedback line; anything else is a
    /// pattern for the current guess.
    fn parse_input(&self, input: &str) -> Result<Feedback, SessionError> {
        let input = input.trim();
        if input.contains(char::is_whitespace) {
            return Ok(Feedback::parse(input)?);
        }
        match &self.guess {
            Some(guess) => Ok(Feedback::from_pattern(guess, input)?),
            None => Err(SessionError::Finished),
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let result = self
            .parse_input(input)
            .and_then(|feedback| self.session.apply_feedback(feedback).cloned());

        match result {
            Ok(turn) => {
                self.input_buffer.clear();
                debug!("applied {}", turn.feedback);
                self.refresh();
                if let SessionState::Solved(word) = self.session.state().clone() {
                    let guesses = self.session.history().len();
                    self.stats.games_solved += 1;
                    self.stats.total_guesses += guesses;
                    self.add_message(
                        &format!(
                            "Solved: {} after {guesses} feedback {}. Ctrl-N for a new game.",
                            word.text().to_uppercase(),
                            if guesses == 1 { "line" } else { "lines" }
                        ),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("{} -> {} candidates", turn.before, turn.after),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) if e.is_contradiction() => {
                self.add_message(
                    &format!("Contradiction: {e}. Feedback ignored."),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started.", MessageStyle::Info);
        self.refresh();
    }

    /// Use the typed word instead of the top suggestion
    pub fn use_manual_word(&mut self) {
        match Word::new(self.manual_word.as_str()) {
            Ok(word) => {
                self.add_message(
                    &format!("Guessing {} instead", word.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.guess = Some(word);
                self.manual_word.clear();
                self.input_mode = InputMode::Feedback;
            }
            Err(e) => self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.remaining()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('n'), true) => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter the word you are guessing", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) if self.manual_word.len() < 5 && c.is_ascii_alphabetic() => {
                    self.manual_word.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => self.use_manual_word(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
