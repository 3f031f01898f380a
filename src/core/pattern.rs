//! Feedback pattern calculation and representation
//!
//! A pattern encodes the response to a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, after duplicate accounting)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};

/// Feedback for a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the target (all occurrences accounted for)
    Absent,
    /// Letter occurs in the target but not at this position
    Present,
    /// Letter is at exactly this position
    Correct,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            1 => Self::Present,
            2 => Self::Correct,
            _ => Self::Absent,
        }
    }
}

/// Response pattern for a full guess
///
/// Represents the five slot feedbacks as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (the guess is the target)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Total number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Build a pattern from individual slot feedbacks
    #[must_use]
    pub fn from_feedback(slots: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for slot in slots {
            pattern += slot.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode the pattern into per-slot feedbacks
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut slots = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut slots {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        slots
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the secret
    ///
    /// This implements the puzzle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume the matched target
    ///    letter, so it cannot also satisfy a displaced match
    /// 2. Second pass: mark present-but-wrong-position letters from the
    ///    remaining per-letter counts
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let g = guess.letters();
        let t = target.letters();

        let mut slots = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];

        // First pass: exact matches; unmatched target letters feed the pool
        for i in 0..WORD_LENGTH {
            if g[i] == t[i] {
                slots[i] = Feedback::Correct;
            } else {
                remaining[(t[i] - b'a') as usize] += 1;
            }
        }

        // Second pass: displaced matches consume from the remaining pool
        for i in 0..WORD_LENGTH {
            if slots[i] == Feedback::Correct {
                continue;
            }
            let idx = (g[i] - b'a') as usize;
            if remaining[idx] > 0 {
                slots[i] = Feedback::Present;
                remaining[idx] -= 1;
            }
        }

        Self::from_feedback(slots)
    }

    /// Count the slots marked correct
    #[must_use]
    pub fn count_correct(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..WORD_LENGTH {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Count the slots marked present
    #[must_use]
    pub fn count_present(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..WORD_LENGTH {
            if val % 3 == 1 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Parse a pattern from a string like "gy-gy" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gy-gy").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut pattern = 0u8;
        let mut multiplier = 1u8;

        for ch in chars {
            let digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' => 0,
                _ => return None,
            };
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Some(Self(pattern))
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(4 * WORD_LENGTH);
        let mut val = self.0;

        for _ in 0..WORD_LENGTH {
            result.push(match val % 3 {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            });
            val /= 3;
        }

        result
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
