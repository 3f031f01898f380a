//! Guess selection strategies
//!
//! Defines the Strategy contract, the session policy names, and the plain
//! constraint-filter strategy. The letter-novelty and minimax strategies
//! live in their own modules.

use super::cache::ResponseCache;
use super::constraints::ConstraintState;
use super::engine::EngineError;
use super::pool::CandidatePool;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Read-only view of the session state a strategy may consult
pub struct SessionView<'a> {
    /// Zero-based attempt number of the word being chosen
    pub attempt: usize,
    /// Full guessable vocabulary
    pub guesses: &'a [Word],
    /// Candidates still consistent with all feedback
    pub pool: &'a CandidatePool,
    /// Accumulated letter/position knowledge
    pub constraints: &'a ConstraintState,
    /// Shared response memoization
    pub cache: &'a ResponseCache,
}

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the next guess from the current session state
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidate` when the strategy's search space is
    /// empty: the accumulated constraints are inconsistent with every known
    /// word.
    fn select(&mut self, view: &SessionView<'_>, rng: &mut StdRng) -> Result<Word, EngineError>;
}

/// Session-wide guess selection policy
///
/// `Adaptive` mixes the filter and letter-novelty strategies per attempt;
/// the other variants drive every attempt through a single strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Per-attempt mix of filter and letter-novelty (default)
    #[default]
    Adaptive,
    /// Uniform random pick from the candidate pool
    Filter,
    /// Letter-novelty scoring over the full guess list
    Entropy,
    /// Worst-case partition search
    Minimax,
}

impl Policy {
    /// Create a policy from a name string
    ///
    /// Supported names: "adaptive", "filter", "entropy", "minimax".
    /// Defaults to adaptive if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "filter" | "random" => Self::Filter,
            "entropy" => Self::Entropy,
            "minimax" => Self::Minimax,
            _ => Self::Adaptive,
        }
    }
}

/// Plain constraint filter
///
/// Picks uniformly at random from the candidates that survived every
/// recorded feedback.
pub struct FilterStrategy;

impl Strategy for FilterStrategy {
    fn select(&mut self, view: &SessionView<'_>, rng: &mut StdRng) -> Result<Word, EngineError> {
        view.pool
            .words()
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoCandidate)
    }
}
