//! Word Guess Suggester - CLI
//!
//! Interactive TUI by default, plus a line-based mode, one-shot ranking,
//! simulation against a known answer and batch benchmarks.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use wordle_suggest::{
    commands::{
        SimulationConfig, analyze_word, progress_bar, rank_after_feedback, run_benchmark,
        run_simple, sample_targets, simulate,
    },
    core::Catalog,
    interactive::{App, run_tui},
    output::{
        ListOrder, print_analysis_result, print_benchmark_result, print_ranking,
        print_simulation_result,
    },
    solver::{Session, SuggestConfig},
    wordlists::{LoadOptions, default_catalog, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_suggest",
    about = "Suggests guesses for a five-letter word game from letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a 'word frequency' file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Drop words seen fewer times than this
    #[arg(long, global = true, default_value_t = 1000)]
    min_frequency: u64,

    /// Pool size above which only a heuristic shortlist is evaluated
    #[arg(long, global = true, default_value_t = 500)]
    threshold: usize,

    /// Shortlist length used above the threshold
    #[arg(long, global = true, default_value_t = 20)]
    shortlist: usize,

    /// Number of suggestions to show
    #[arg(long, global = true, default_value_t = 20)]
    top: usize,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based interactive mode
    Simple,

    /// Rank guesses after the given feedback lines
    Rank {
        /// Feedback lines such as "+a -l -p -h -a", applied in order
        #[arg(allow_hyphen_values = true)]
        feedback: Vec<String>,
    },

    /// Simulate play against a known answer
    Solve {
        /// The answer to find
        word: String,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Give up after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,

        /// Show candidate counts and expected sizes per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Score one word against the word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Simulate many answers and summarize guess counts
    Benchmark {
        /// Number of answers to simulate
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Sample answers randomly with this seed instead of taking the first N
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load the catalog selected by the -w flag
fn load_catalog(wordlist: &str, options: &LoadOptions) -> Result<Catalog> {
    match wordlist {
        "embedded" => Ok(default_catalog(options)),
        path => load_from_file(path, options)
            .with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = LoadOptions::new(cli.min_frequency);
    let catalog = load_catalog(&cli.wordlist, &options)?;
    let config = SuggestConfig::new(cli.threshold, cli.shortlist, cli.top);
    info!("{} candidates, {config:?}", catalog.len());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(Session::new(catalog, config))),
        Commands::Simple => run_simple(Session::new(catalog, config)),
        Commands::Rank { feedback } => {
            let ranking = rank_after_feedback(catalog, &feedback, config)?;
            print_ranking(&ranking, ListOrder::BestFirst);
            Ok(())
        }
        Commands::Solve {
            word,
            first_guess,
            max_guesses,
            details,
        } => {
            let simulation = SimulationConfig::new(word)
                .with_first_guess(first_guess)
                .with_max_guesses(max_guesses);
            let result = simulate(&catalog, &simulation, &config)?;
            print_simulation_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &catalog)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            first_guess,
            seed,
        } => {
            let targets = sample_targets(&catalog, count, seed);
            println!("Simulating {} answers...", targets.len());
            let progress = progress_bar(targets.len())?;
            let result = run_benchmark(
                &catalog,
                &targets,
                first_guess.as_deref(),
                &config,
                &progress,
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
