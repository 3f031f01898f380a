//! Worst-case partition search
//!
//! For every word it may play, partitions the candidate pool by the response
//! each candidate would produce, and plays the word whose largest partition
//! is smallest, bounding the ambiguity an adversarial secret can leave
//! behind. The winning partition is kept so that real feedback
//! resolves to its bucket without re-filtering.

use super::cache::ResponseCache;
use super::engine::{EngineError, OPENER};
use super::strategy::{SessionView, Strategy};
use crate::core::{Pattern, Word};
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Minimax strategy with the retained partition of its last chosen guess
pub struct MinimaxStrategy {
    partition: FxHashMap<Pattern, Vec<Word>>,
}

impl MinimaxStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            partition: FxHashMap::default(),
        }
    }

    /// Pull the candidate bucket matching an observed pattern
    ///
    /// Consumes the retained partition either way: it described the pool
    /// before this feedback and is stale afterwards. Returns `None` when the
    /// pattern was never simulated (the secret is outside the guess
    /// dictionary) and the caller falls back to the predicate shrink.
    pub(crate) fn take_bucket(&mut self, pattern: Pattern) -> Option<Vec<Word>> {
        let bucket = self.partition.remove(&pattern);
        self.partition.clear();
        bucket
    }

    /// Size of the largest response class `guess` leaves over `pool`
    fn worst_bucket(guess: Word, pool: &[Word], cache: &ResponseCache) -> usize {
        let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        for &candidate in pool {
            *counts.entry(cache.response(guess, candidate)).or_insert(0) += 1;
        }
        counts.values().copied().max().unwrap_or(0)
    }

    /// Full partition of `pool` by response to `guess`
    fn partition_for(
        guess: Word,
        pool: &[Word],
        cache: &ResponseCache,
    ) -> FxHashMap<Pattern, Vec<Word>> {
        let mut buckets: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
        for &candidate in pool {
            buckets
                .entry(cache.response(guess, candidate))
                .or_default()
                .push(candidate);
        }
        buckets
    }
}

impl Strategy for MinimaxStrategy {
    fn select(&mut self, view: &SessionView<'_>, _rng: &mut StdRng) -> Result<Word, EngineError> {
        let pool = view.pool.words();

        if pool.is_empty() {
            self.partition.clear();
            return Err(EngineError::NoCandidate);
        }

        // A lone candidate must be the answer; the stale partition would
        // otherwise shadow the fallback shrink on the next feedback.
        if let [only] = pool {
            self.partition.clear();
            return Ok(*only);
        }

        // Scanning the whole vocabulary before any feedback exists buys
        // nothing; the opening attempt is pinned to the fixed seed.
        let seed = [OPENER];
        let scanned: &[Word] = if view.attempt == 0 { &seed } else { view.guesses };

        // Deterministic tie-break: carry the vocabulary index through the
        // reduction so equal costs resolve to the first-scanned word.
        let chosen = scanned
            .par_iter()
            .enumerate()
            .map(|(index, &guess)| (index, Self::worst_bucket(guess, pool, view.cache)))
            .min_by_key(|&(index, cost)| (cost, index))
            .map(|(index, _)| scanned[index])
            .ok_or(EngineError::NoCandidate)?;

        self.partition = Self::partition_for(chosen, pool, view.cache);
        Ok(chosen)
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::constraints::ConstraintState;
    use crate::solver::pool::CandidatePool;
    use rand::SeedableRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn select_with(
        strategy: &mut MinimaxStrategy,
        attempt: usize,
        guesses: &[Word],
        pool: &CandidatePool,
        cache: &ResponseCache,
    ) -> Result<Word, EngineError> {
        let constraints = ConstraintState::new();
        let view = SessionView {
            attempt,
            guesses,
            pool,
            constraints: &constraints,
            cache,
        };
        let mut rng = StdRng::seed_from_u64(0);
        strategy.select(&view, &mut rng)
    }

    #[test]
    fn chosen_guess_minimizes_worst_bucket() {
        let guesses = words(&["abate", "abide", "adobe", "zesty", "union"]);
        let pool_words = words(&["abate", "abide", "adobe"]);
        let pool = CandidatePool::new(&pool_words);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let chosen = select_with(&mut strategy, 1, &guesses, &pool, &cache).unwrap();

        let chosen_cost = MinimaxStrategy::worst_bucket(chosen, pool.words(), &cache);
        for &alternative in &guesses {
            let cost = MinimaxStrategy::worst_bucket(alternative, pool.words(), &cache);
            assert!(
                chosen_cost <= cost,
                "{chosen} (worst {chosen_cost}) beaten by {alternative} (worst {cost})"
            );
        }
    }

    #[test]
    fn tie_break_is_first_in_vocabulary_order() {
        // Both candidate words split {aaaaa, bbbbb} perfectly; the scan must
        // settle on the earlier one every time.
        let guesses = words(&["aaaaa", "bbbbb"]);
        let pool_words = words(&["aaaaa", "bbbbb"]);
        let cache = ResponseCache::new();

        for _ in 0..10 {
            let pool = CandidatePool::new(&pool_words);
            let mut strategy = MinimaxStrategy::new();
            let chosen = select_with(&mut strategy, 1, &guesses, &pool, &cache).unwrap();
            assert_eq!(chosen, word("aaaaa"));
        }
    }

    #[test]
    fn opening_attempt_is_pinned_to_seed() {
        let guesses = words(&["abate", "abide", "adobe"]);
        let pool_words = words(&["abate", "abide", "adobe"]);
        let pool = CandidatePool::new(&pool_words);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let chosen = select_with(&mut strategy, 0, &guesses, &pool, &cache).unwrap();
        assert_eq!(chosen, OPENER);
    }

    #[test]
    fn single_candidate_returned_directly() {
        let guesses = words(&["abate", "abide"]);
        let pool_words = words(&["abide"]);
        let pool = CandidatePool::new(&pool_words);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let chosen = select_with(&mut strategy, 3, &guesses, &pool, &cache).unwrap();
        assert_eq!(chosen, word("abide"));

        // No partition retained: any observed pattern falls back
        assert!(strategy.take_bucket(Pattern::PERFECT).is_none());
    }

    #[test]
    fn empty_pool_fails() {
        let guesses = words(&["abate"]);
        let pool = CandidatePool::new(&[]);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let result = select_with(&mut strategy, 1, &guesses, &pool, &cache);
        assert!(matches!(result, Err(EngineError::NoCandidate)));
    }

    #[test]
    fn retained_partition_matches_observed_feedback() {
        let guesses = words(&["abate", "abide", "adobe", "crane"]);
        let pool_words = words(&["abate", "abide", "adobe"]);
        let pool = CandidatePool::new(&pool_words);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let chosen = select_with(&mut strategy, 1, &guesses, &pool, &cache).unwrap();

        // Simulate the secret being ABIDE and look up the real bucket
        let secret = word("abide");
        let observed = Pattern::calculate(&chosen, &secret);
        let bucket = strategy.take_bucket(observed).expect("pattern simulated");

        assert!(bucket.contains(&secret));
        // Every bucket member reproduces the observed pattern
        for member in &bucket {
            assert_eq!(Pattern::calculate(&chosen, member), observed);
        }
    }

    #[test]
    fn unsimulated_pattern_yields_no_bucket() {
        let guesses = words(&["abate", "abide", "adobe"]);
        let pool_words = words(&["abate", "abide"]);
        let pool = CandidatePool::new(&pool_words);
        let cache = ResponseCache::new();

        let mut strategy = MinimaxStrategy::new();
        let chosen = select_with(&mut strategy, 1, &guesses, &pool, &cache).unwrap();

        // A secret outside the dictionary can produce a pattern no candidate
        // was grouped under
        let outside = word("zzzzz");
        let observed = Pattern::calculate(&chosen, &outside);
        assert!(strategy.take_bucket(observed).is_none());
    }
}
