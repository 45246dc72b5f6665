//! Line-based interactive mode
//!
//! Read a feedback line, apply it, print the new ranking. The best
//! suggestion is printed last so it sits right above the prompt.

use crate::output::formatters::suggestion_line;
use crate::solver::{Ranking, Session, SessionError, SessionState};
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};

const USAGE: &str = "\
Enter 5 fields of the form XY where X is -, +, or ~ and Y is a letter a-z.
\t- means wrong letter; doesn't appear in the word
\t+ means correct letter
\t~ means letter appears in the word in a different position
Commands: 'new' starts over, 'quit' or an empty line exits.";

/// Run the interactive loop on stdin/stdout
///
/// # Errors
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(session: Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(session, stdin.lock(), stdout.lock())
}

/// Run the interactive loop on arbitrary streams
///
/// Ends on end of input, an empty line or `quit`.
///
/// # Errors
/// Returns an error if reading or writing fails.
pub fn run_repl<R: BufRead, W: Write>(mut session: Session, input: R, mut out: W) -> Result<()> {
    report(&mut session, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();

        match line {
            "" | "quit" | "q" | "exit" => break,
            "new" => {
                session.restart();
                writeln!(out, "{}", "New game.".bright_cyan())?;
                report(&mut session, &mut out)?;
            }
            "help" | "?" => writeln!(out, "{USAGE}")?,
            _ => match session.submit_line(line) {
                Ok(turn) => {
                    info!("{}: {} -> {}", turn.feedback, turn.before, turn.after);
                    report(&mut session, &mut out)?;
                }
                Err(SessionError::InvalidFeedback(e)) => {
                    writeln!(out, "{} {e}", "Invalid feedback:".red())?;
                    writeln!(out, "{USAGE}")?;
                }
                Err(e) if e.is_contradiction() => {
                    writeln!(out, "{} {e}", "Contradiction:".red().bold())?;
                    writeln!(
                        out,
                        "Feedback ignored; {} candidates remain. Check the line or type 'new'.",
                        session.remaining()
                    )?;
                }
                Err(e) => writeln!(out, "{e}; type 'new' to start over.")?,
            },
        }
    }

    Ok(())
}

/// Print the ranking for the current state, or the final word
fn report<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    match session.state().clone() {
        SessionState::Solved(word) => {
            writeln!(
                out,
                "{} {}",
                "Solved:".green().bold(),
                word.text().to_uppercase().bright_white().bold()
            )?;
        }
        SessionState::Exhausted => {
            writeln!(out, "{}", "No candidates in the word list.".red())?;
        }
        SessionState::AwaitingGuess | SessionState::AwaitingFeedback => {
            let ranking = session.suggest();
            write_ranking(&ranking, out)?;
        }
    }
    Ok(())
}

fn write_ranking<W: Write>(ranking: &Ranking, out: &mut W) -> io::Result<()> {
    for suggestion in ranking.suggestions.iter().rev() {
        writeln!(out, "{}", suggestion_line(suggestion))?;
    }
    writeln!(out, "{} candidates", ranking.total_candidates)
}
