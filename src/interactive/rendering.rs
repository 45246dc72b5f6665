//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Row, Table},
};

const CANDIDATE_PREVIEW: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_suggestions(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GUESS SUGGESTER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Suggestions ({} candidates) ",
            app.candidates_count()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.input_mode == InputMode::Finished {
        let text = app.guess.as_ref().map_or_else(
            || "No candidates.".to_string(),
            |word| format!("Answer: {}", word.text().to_uppercase()),
        );
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let rows = app.ranking.suggestions.iter().enumerate().map(|(i, s)| {
        let style = if app.guess.as_ref() == Some(&s.word) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(vec![
            format!("{:>2}", i + 1),
            s.word.text().to_uppercase(),
            format!("{:.2}", s.expected_remaining),
            s.frequency.to_string(),
            s.heuristic_score.to_string(),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["#", "Word", "Expected", "Frequency", "Score"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(block);

    f.render_widget(table, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Pool gauge
            Constraint::Percentage(40), // Candidates
            Constraint::Percentage(30), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let initial = app
        .session
        .history()
        .first()
        .map_or(app.candidates_count(), |turn| turn.before);
    let eliminated = initial - app.candidates_count();
    let ratio = if initial == 0 {
        0.0
    } else {
        eliminated as f64 / initial as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Eliminated ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{eliminated}/{initial}"));
    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let mut lines: Vec<Line> = candidates
        .iter()
        .take(CANDIDATE_PREVIEW)
        .map(|c| Line::from(format!("{}  {}", c.word.text().to_uppercase(), c.frequency)))
        .collect();
    if candidates.len() > CANDIDATE_PREVIEW {
        lines.push(Line::from(Span::styled(
            format!("... {} more", candidates.len() - CANDIDATE_PREVIEW),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Exact => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, turn)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(turn.feedback.iter().map(|(_, mark, letter)| {
                Span::styled(
                    format!(" {} ", char::from(letter).to_ascii_uppercase()),
                    Style::default().fg(Color::Black).bg(mark_color(mark)),
                )
            }));
            spans.push(Span::raw(format!(" {} → {}", turn.before, turn.after)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let guess = app
        .guess
        .as_ref()
        .map_or_else(String::new, |w| w.text().to_uppercase());
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Solved | n: new game, q: quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            format!(" Feedback for {guess} (+ ~ - or G Y _) | Tab: other word "),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Word you are guessing | Esc: cancel ".to_string(),
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats.average_guesses().map_or_else(
        || "Solved: 0".to_string(),
        |avg| format!("Solved: {} | Avg: {avg:.2}", app.stats.games_solved),
    );
    let text = format!("{stats} | Ctrl-N: new game | Esc: clear | Ctrl-C: quit");
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
