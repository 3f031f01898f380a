//! The guessing engine
//!
//! Constraint tracking, the candidate pool, the three selection strategies
//! and the session orchestration that ties them together.

pub mod cache;
pub mod constraints;
pub mod engine;
pub mod entropy;
pub mod minimax;
pub mod pool;
pub mod strategy;

pub use cache::ResponseCache;
pub use constraints::{ConstraintState, LetterKnowledge, LetterSet};
pub use engine::{Engine, EngineError, MAX_ATTEMPTS, SessionOutcome};
pub use entropy::EntropyStrategy;
pub use minimax::MinimaxStrategy;
pub use pool::CandidatePool;
pub use strategy::{FilterStrategy, Policy, SessionView, Strategy};
