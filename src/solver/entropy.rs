//! Letter-novelty scoring strategy
//!
//! Scores every word in the full guessable vocabulary, not just the
//! remaining candidates, by how much new information guessing it would
//! reveal, and plays a top scorer. Probing with non-candidates is the point:
//! when many candidates share a frame (e.g. `_atch`), a throwaway guess full
//! of novel letters splits them faster than guessing candidates one by one.

use super::constraints::{ConstraintState, LetterKnowledge};
use super::engine::EngineError;
use super::strategy::{SessionView, Strategy};
use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Bonus per distinct letter in the word
const DISTINCT_BONUS: i32 = 20;
/// Bonus for a letter nothing is known about yet
const NOVEL_BONUS: i32 = 20;
/// Penalty for a letter whose position is already confirmed
const SOLVED_PENALTY: i32 = -20;
/// Penalty for replaying a misplaced letter at a position already tried
const RETRIED_PENALTY: i32 = -100;
/// Penalty for a misplaced letter at a fresh position
const MISPLACED_PENALTY: i32 = -5;
/// Penalty for a letter known to be absent
const ABSENT_PENALTY: i32 = -100;

/// Expected-new-information score for one word
///
/// Distinct letters are worth more than repeats, novel letters more than
/// known ones, and slots spent on letters already ruled out are wasted.
#[must_use]
pub fn score(word: &Word, constraints: &ConstraintState) -> i32 {
    let mut total = DISTINCT_BONUS * word.distinct_count() as i32;

    for (position, &letter) in word.letters().iter().enumerate() {
        total += match constraints.knowledge_of(letter) {
            LetterKnowledge::Untried => NOVEL_BONUS,
            LetterKnowledge::Placed(_) => SOLVED_PENALTY,
            LetterKnowledge::Absent => ABSENT_PENALTY,
            LetterKnowledge::Present => {
                if constraints.was_tried(letter, position) {
                    RETRIED_PENALTY
                } else {
                    MISPLACED_PENALTY
                }
            }
        };
    }

    total
}

/// Information-maximizing strategy
///
/// Plays the highest-scoring word from the full guess list; ties are broken
/// uniformly at random.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select(&mut self, view: &SessionView<'_>, rng: &mut StdRng) -> Result<Word, EngineError> {
        let mut best = i32::MIN;
        let mut top: Vec<Word> = Vec::new();

        for &word in view.guesses {
            let word_score = score(&word, view.constraints);
            if word_score > best {
                best = word_score;
                top.clear();
                top.push(word);
            } else if word_score == best {
                top.push(word);
            }
        }

        top.choose(rng).copied().ok_or(EngineError::NoCandidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::solver::cache::ResponseCache;
    use crate::solver::pool::CandidatePool;
    use rand::SeedableRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn fresh_state_scores_by_distinct_letters() {
        let constraints = ConstraintState::new();

        // Five novel distinct letters: 5×20 + 5×20
        assert_eq!(score(&word("crane"), &constraints), 200);
        // Four distinct letters, five novel occurrences: 4×20 + 5×20
        assert_eq!(score(&word("speed"), &constraints), 180);
    }

    #[test]
    fn known_absent_letters_are_penalized() {
        let mut constraints = ConstraintState::new();
        let guess = word("crane");
        constraints.apply(guess, Pattern::calculate(&guess, &word("split")));

        // Every letter of CRANE is now known absent
        assert_eq!(score(&word("crane"), &constraints), 5 * 20 + 5 * -100);
    }

    #[test]
    fn replaying_tried_position_is_worst() {
        let mut constraints = ConstraintState::new();
        // R is present in CRANE but wrong at position 0
        let guess = word("raise");
        constraints.apply(guess, Pattern::calculate(&guess, &word("crane")));

        let fresh_position = score(&word("borne"), &constraints);
        let retried_position = score(&word("rinds"), &constraints);

        // RINDS replays R at the already-tried position 0
        assert!(retried_position < fresh_position);
    }

    #[test]
    fn selects_a_top_scorer() {
        let guesses: Vec<Word> = ["crane", "speed", "daddy"]
            .iter()
            .map(|w| word(w))
            .collect();
        let pool = CandidatePool::new(&guesses);
        let constraints = ConstraintState::new();
        let cache = ResponseCache::new();
        let mut rng = StdRng::seed_from_u64(1);

        let view = SessionView {
            attempt: 2,
            guesses: &guesses,
            pool: &pool,
            constraints: &constraints,
            cache: &cache,
        };

        // CRANE strictly outscores the words with repeated letters
        let choice = EntropyStrategy.select(&view, &mut rng).unwrap();
        assert_eq!(choice, word("crane"));
    }

    #[test]
    fn ties_break_within_top_set() {
        let guesses: Vec<Word> = ["crane", "slimy", "daddy"]
            .iter()
            .map(|w| word(w))
            .collect();
        let pool = CandidatePool::new(&guesses);
        let constraints = ConstraintState::new();
        let cache = ResponseCache::new();

        let view = SessionView {
            attempt: 2,
            guesses: &guesses,
            pool: &pool,
            constraints: &constraints,
            cache: &cache,
        };

        // CRANE and SLIMY tie at the top; DADDY never wins
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = EntropyStrategy.select(&view, &mut rng).unwrap();
            assert_ne!(choice, word("daddy"));
        }
    }

    #[test]
    fn empty_guess_list_fails() {
        let guesses: Vec<Word> = vec![];
        let pool = CandidatePool::new(&guesses);
        let constraints = ConstraintState::new();
        let cache = ResponseCache::new();
        let mut rng = StdRng::seed_from_u64(1);

        let view = SessionView {
            attempt: 2,
            guesses: &guesses,
            pool: &pool,
            constraints: &constraints,
            cache: &cache,
        };

        let result = EntropyStrategy.select(&view, &mut rng);
        assert!(matches!(result, Err(EngineError::NoCandidate)));
    }
}
