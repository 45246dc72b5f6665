//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, progress_bar, run_benchmark, sample_targets};
pub use rank::rank_after_feedback;
pub use simple::{run_repl, run_simple};
pub use solve::{GuessStep, SimulationConfig, SimulationResult, simulate};
