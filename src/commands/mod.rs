//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, run_benchmark_with_progress};
pub use play::{PlayError, PlayStats, play_session, run_play};
pub use simulate::{GameEnd, GameResult, GameStep, SimulateConfig, simulate_game};
