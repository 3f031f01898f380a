//! Solve a known secret
//!
//! Runs a full session against a known target word, answering each guess
//! with ground-truth feedback, and collects the guess trail.

use crate::core::{Pattern, Word};
use crate::solver::{Engine, EngineError, MAX_ATTEMPTS, Policy};
use crate::wordlists::Vocabulary;

/// A single step in a solution trail
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving one target
pub struct SolveReport {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub solved: bool,
}

/// Solve a specific target word with the given policy
///
/// # Errors
///
/// Returns an error if the target word is malformed, or if the engine runs
/// out of candidates (the target is outside the vocabulary).
pub fn solve_word(
    vocabulary: &Vocabulary,
    policy: Policy,
    seed: Option<u64>,
    target: &str,
) -> Result<SolveReport, EngineError> {
    let target = Word::new(target)?;

    let mut engine = match seed {
        Some(seed) => Engine::with_seed(vocabulary, policy, seed),
        None => Engine::new(vocabulary, policy),
    };

    let mut steps = Vec::new();

    for attempt in 0..MAX_ATTEMPTS {
        let candidates_before = engine.remaining();
        let guess = engine.choose_word(attempt)?;
        let pattern = Pattern::calculate(&guess, &target);
        engine.record_feedback(guess, pattern);

        steps.push(GuessStep {
            word: guess,
            pattern,
            candidates_before,
            candidates_after: engine.remaining(),
        });

        if pattern.is_perfect() {
            return Ok(SolveReport {
                target,
                steps,
                solved: true,
            });
        }
    }

    Ok(SolveReport {
        target,
        steps,
        solved: false,
    })
}
