//! Core domain types
//!
//! The fundamental value types of the guessing engine: validated words and
//! the per-slot feedback patterns compared against them. Everything here is
//! pure and has no dependency on the solver state.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};

/// Fixed word length of the puzzle
pub const WORD_LENGTH: usize = 5;
