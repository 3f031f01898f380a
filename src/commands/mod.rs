//! Command implementations

pub mod assist;
pub mod simulate;
pub mod solve;

pub use assist::run_assist;
pub use simulate::{SimulationStats, run_simulation};
pub use solve::{GuessStep, SolveReport, solve_word};
