//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, suggestion_line};
use crate::commands::{AnalysisResult, BenchmarkResult, SimulationResult};
use crate::solver::Ranking;
use colored::Colorize;

/// Which end of a printed ranking holds the best suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    BestFirst,
    /// Best suggestion printed last, right above the prompt
    BestLast,
}

/// Print a ranking followed by the candidate count
pub fn print_ranking(ranking: &Ranking, order: ListOrder) {
    let mut rows: Vec<_> = ranking.suggestions.iter().collect();
    if order == ListOrder::BestLast {
        rows.reverse();
    }
    let best = ranking.best();

    for suggestion in rows {
        let line = suggestion_line(suggestion);
        if best.is_some_and(|b| b.word == suggestion.word) {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }
    println!(
        "{} candidates",
        ranking.total_candidates.to_string().bright_cyan()
    );
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_feedback(&step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Feedback:   {}", step.feedback);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Expected:   {:.2} candidates", step.expected_remaining);
        }
    }

    println!();
    let count = result.guess_count();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", plural(count, "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {count} {}", plural(count, "guess", "guesses"))
                .red()
                .bold()
        );
    }
}

const fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    match result.frequency {
        Some(frequency) => println!("   Frequency:   {frequency}"),
        None => println!("   Frequency:   {}", "not in word list".bright_black()),
    }
    println!("   Score:       {}", result.heuristic_score);
    if let Some(rank) = result.heuristic_rank {
        println!("   Rank:        {rank} of {}", result.total_candidates);
    }

    let bar = create_progress_bar(
        result.expected_remaining,
        result.total_candidates as f64,
        30,
    );
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} candidates remain", result.expected_remaining).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=result.max_guesses {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        println!("   {}", result.failures.join(", "));
    }
}
