//! Session orchestration
//!
//! One Engine drives one guessing session: it owns the constraint state and
//! candidate pool, dispatches the configured strategy per attempt, and
//! tracks the terminal outcome. The caller alternates `choose_word` and
//! `record_feedback` strictly in sequence.

use super::cache::ResponseCache;
use super::constraints::ConstraintState;
use super::entropy::EntropyStrategy;
use super::minimax::MinimaxStrategy;
use super::pool::CandidatePool;
use super::strategy::{FilterStrategy, Policy, SessionView, Strategy};
use crate::core::{Pattern, Word, WordError};
use crate::wordlists::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Attempt budget for one session
pub const MAX_ATTEMPTS: usize = 6;

/// Fixed opening word, chosen offline for average-case information.
/// Also pins the minimax scan on the opening attempt.
pub(crate) const OPENER: Word = Word::from_letters(*b"arise");

/// Curated second openers covering letters the opener leaves untouched
const SECOND_OPENERS: [Word; 3] = [
    Word::from_letters(*b"cough"),
    Word::from_letters(*b"mount"),
    Word::from_letters(*b"godly"),
];

/// Pool size at which the adaptive policy keeps probing for information
const NOVELTY_POOL_THRESHOLD: usize = 10;

/// Placed-letter count at which probing beats guessing candidates blind
const NOVELTY_PLACED_THRESHOLD: usize = 4;

/// Errors surfaced by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The active strategy's search space is empty: the recorded feedback is
    /// inconsistent with every known word (typically the secret is outside
    /// the vocabulary)
    NoCandidate,
    /// Malformed word input at a parse boundary
    InvalidWord(WordError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate => {
                write!(f, "no candidate is consistent with the recorded feedback")
            }
            Self::InvalidWord(err) => write!(f, "invalid word: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<WordError> for EngineError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

/// Terminal state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// An all-correct pattern was recorded
    Won,
    /// The attempt budget ran out
    Lost,
    /// A strategy found no candidate to play
    Stuck,
}

/// One guessing session
pub struct Engine<'a> {
    vocabulary: &'a Vocabulary,
    policy: Policy,
    constraints: ConstraintState,
    pool: CandidatePool,
    cache: ResponseCache,
    filter: FilterStrategy,
    entropy: EntropyStrategy,
    minimax: MinimaxStrategy,
    rng: StdRng,
    recorded: usize,
    outcome: Option<SessionOutcome>,
}

impl<'a> Engine<'a> {
    /// Start a session with an OS-seeded random source
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, policy: Policy) -> Self {
        Self::with_seed(vocabulary, policy, rand::random())
    }

    /// Start a session with a fixed seed, for reproducible runs
    #[must_use]
    pub fn with_seed(vocabulary: &'a Vocabulary, policy: Policy, seed: u64) -> Self {
        Self {
            vocabulary,
            policy,
            constraints: ConstraintState::new(),
            pool: CandidatePool::new(vocabulary.answers()),
            cache: ResponseCache::new(),
            filter: FilterStrategy,
            entropy: EntropyStrategy,
            minimax: MinimaxStrategy::new(),
            rng: StdRng::seed_from_u64(seed),
            recorded: 0,
            outcome: None,
        }
    }

    /// Propose the word to play for the given attempt (0-based)
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidate` when no known word is consistent
    /// with the feedback recorded so far; the session is then Stuck and it is
    /// up to the caller to end it.
    pub fn choose_word(&mut self, attempt: usize) -> Result<Word, EngineError> {
        let choice = match self.policy {
            Policy::Minimax => {
                let view = SessionView {
                    attempt,
                    guesses: self.vocabulary.guesses(),
                    pool: &self.pool,
                    constraints: &self.constraints,
                    cache: &self.cache,
                };
                self.minimax.select(&view, &mut self.rng)
            }
            Policy::Adaptive | Policy::Filter | Policy::Entropy => match attempt {
                0 => Ok(OPENER),
                1 => SECOND_OPENERS
                    .choose(&mut self.rng)
                    .copied()
                    .ok_or(EngineError::NoCandidate),
                _ => self.select_constrained(attempt),
            },
        };

        if choice.is_err() && self.outcome.is_none() {
            self.outcome = Some(SessionOutcome::Stuck);
        }
        choice
    }

    /// Strategy dispatch once real constraints exist (attempt >= 2)
    fn select_constrained(&mut self, attempt: usize) -> Result<Word, EngineError> {
        let probe = match self.policy {
            Policy::Entropy => true,
            Policy::Filter => false,
            // Probe while the pool is still wide, or when the frame is almost
            // solved and burning a candidate guess per remaining letter would
            // cost more than one throwaway probe.
            _ => {
                self.pool.len() >= NOVELTY_POOL_THRESHOLD
                    || (self.constraints.placed_count() >= NOVELTY_PLACED_THRESHOLD
                        && attempt + 1 < MAX_ATTEMPTS)
            }
        };

        let view = SessionView {
            attempt,
            guesses: self.vocabulary.guesses(),
            pool: &self.pool,
            constraints: &self.constraints,
            cache: &self.cache,
        };

        if probe {
            self.entropy.select(&view, &mut self.rng)
        } else {
            self.filter.select(&view, &mut self.rng)
        }
    }

    /// Record the observed pattern for a played guess
    ///
    /// Folds the feedback into the constraint state and shrinks the pool.
    /// Under the minimax policy the pool becomes the retained partition's
    /// bucket for the observed pattern when one exists; otherwise (and for
    /// every other policy) the predicate shrink applies.
    pub fn record_feedback(&mut self, guess: Word, pattern: Pattern) {
        self.constraints.apply(guess, pattern);

        if self.policy == Policy::Minimax {
            if let Some(bucket) = self.minimax.take_bucket(pattern) {
                self.pool.replace(bucket);
            } else {
                self.pool.shrink(&self.constraints);
            }
        } else {
            self.pool.shrink(&self.constraints);
        }

        self.recorded += 1;
        if self.outcome.is_none() {
            if pattern.is_perfect() {
                self.outcome = Some(SessionOutcome::Won);
            } else if self.recorded >= MAX_ATTEMPTS {
                self.outcome = Some(SessionOutcome::Lost);
            }
        }
    }

    /// Number of candidates still consistent with all feedback
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// The remaining candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.pool.words()
    }

    /// Terminal state, if the session has reached one
    #[must_use]
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Number of feedback rounds recorded
    #[must_use]
    pub fn attempts_recorded(&self) -> usize {
        self.recorded
    }

    /// The accumulated constraint state
    #[must_use]
    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }
}
