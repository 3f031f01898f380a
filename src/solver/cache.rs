//! Memoized response lookups
//!
//! The minimax scan recomputes the response for every (guess, candidate)
//! pair on every attempt; pairs recur across attempts as the pool shrinks,
//! so responses are cached. The cache is owned by one engine and dies with
//! it. It is never consulted for correctness and may be dropped wholesale
//! at any time.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::sync::RwLock;

/// Default entry bound before the cache is dropped and restarted
const DEFAULT_CAPACITY: usize = 1 << 20;

/// Cache of guess/target response patterns
///
/// Supports concurrent readers and idempotent concurrent inserts, so the
/// minimax scan can share one cache across its worker threads. Computing the
/// same pattern twice under contention is harmless.
pub struct ResponseCache {
    entries: RwLock<FxHashMap<(Word, Word), Pattern>>,
    capacity: usize,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache that holds at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            capacity,
        }
    }

    /// Memoized `Pattern::calculate(guess, target)`
    pub fn response(&self, guess: Word, target: Word) -> Pattern {
        if let Some(&pattern) = self
            .entries
            .read()
            .expect("cache lock poisoned")
            .get(&(guess, target))
        {
            return pattern;
        }

        let pattern = Pattern::calculate(&guess, &target);

        let mut entries = self.entries.write().expect("cache lock poisoned");
        // Capacity bound: dropping everything is safe, the cache is purely a
        // performance layer.
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert((guess, target), pattern);

        pattern
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached entries
    pub fn clear(&self) {
        self.entries.write().expect("cache lock poisoned").clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
