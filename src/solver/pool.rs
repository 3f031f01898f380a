//! Live candidate set
//!
//! The subset of the answer vocabulary still consistent with every recorded
//! feedback. It only ever shrinks; a fresh pool is built at session start.

use super::constraints::ConstraintState;
use crate::core::Word;

/// Monotonically shrinking set of possible answers
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Start a pool holding the full answer vocabulary
    #[must_use]
    pub fn new(answers: &[Word]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The remaining candidates, in stable vocabulary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Drop every candidate no longer permitted by the constraints
    pub fn shrink(&mut self, constraints: &ConstraintState) {
        self.words.retain(|word| constraints.permits(word));
    }

    /// Replace the pool with a precomputed subset
    ///
    /// Used by the minimax feedback path, whose partition buckets are carved
    /// out of the current pool.
    pub fn replace(&mut self, words: Vec<Word>) {
        self.words = words;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pool_of(words: &[&str]) -> CandidatePool {
        let words: Vec<Word> = words.iter().map(|w| word(w)).collect();
        CandidatePool::new(&words)
    }

    #[test]
    fn shrink_keeps_consistent_candidates() {
        let mut pool = pool_of(&["crane", "crate", "grate", "month"]);
        let mut constraints = ConstraintState::new();

        let guess = word("raise");
        constraints.apply(guess, Pattern::calculate(&guess, &word("crane")));
        pool.shrink(&constraints);

        assert!(pool.contains(&word("crane")));
        assert!(pool.contains(&word("crate")));
        assert!(!pool.contains(&word("month")));
    }

    #[test]
    fn shrink_is_idempotent() {
        let mut pool = pool_of(&["crane", "crate", "grate", "slate", "month"]);
        let mut constraints = ConstraintState::new();

        let guess = word("tares");
        constraints.apply(guess, Pattern::calculate(&guess, &word("crane")));

        pool.shrink(&constraints);
        let after_once: Vec<Word> = pool.words().to_vec();
        pool.shrink(&constraints);

        assert_eq!(pool.words(), after_once.as_slice());
    }

    #[test]
    fn shrink_never_grows() {
        let mut pool = pool_of(&["crane", "crate", "grate", "slate", "irate"]);
        let mut constraints = ConstraintState::new();

        let mut previous = pool.len();
        for guess in ["slate", "grate"] {
            let guess = word(guess);
            constraints.apply(guess, Pattern::calculate(&guess, &word("crane")));
            pool.shrink(&constraints);
            assert!(pool.len() <= previous);
            previous = pool.len();
        }
    }

    #[test]
    fn guessed_word_leaves_the_pool() {
        let mut pool = pool_of(&["crane", "crate"]);
        let mut constraints = ConstraintState::new();

        let guess = word("crate");
        constraints.apply(guess, Pattern::calculate(&guess, &word("crane")));
        pool.shrink(&constraints);

        assert!(!pool.contains(&word("crate")));
        assert!(pool.contains(&word("crane")));
    }
}
