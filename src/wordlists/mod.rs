//! Word lists and the vocabulary container
//!
//! Provides embedded word lists compiled into the binary, a runtime loader
//! for user-supplied lists, and the immutable Vocabulary the engine reads.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

use crate::core::Word;
use std::io;
use std::path::Path;

/// The two immutable word lists the engine draws from
///
/// `answers` holds every word eligible to be the secret; `guesses` holds
/// every word the engine may play, a superset of the answers. The content is
/// opaque configuration; the engine never derives vocabulary.
pub struct Vocabulary {
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        Self { answers, guesses }
    }

    /// The vocabulary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(GUESSES),
        )
    }

    /// Load both lists from external files
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read.
    pub fn from_files<P: AsRef<Path>>(answers: P, guesses: P) -> io::Result<Self> {
        Ok(Self::new(
            loader::load_from_file(answers)?,
            loader::load_from_file(guesses)?,
        ))
    }

    /// Words eligible to be the secret
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words the engine may play
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }
}
