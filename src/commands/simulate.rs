//! Whole-dictionary evaluation
//!
//! Runs a session for every answer word (or a limited prefix) and gathers
//! attempt statistics.

use crate::core::{Pattern, Word};
use crate::solver::{Engine, MAX_ATTEMPTS, Policy};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from simulating all answers
pub struct SimulationStats {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub distribution: HashMap<usize, usize>,
    pub average_attempts: f64,
    pub total_time: Duration,
}

/// Run the solver against every answer word
///
/// Each session gets its own engine, seeded from the word's index so runs
/// are reproducible.
#[must_use]
pub fn run_simulation(
    vocabulary: &Vocabulary,
    policy: Policy,
    limit: Option<usize>,
) -> SimulationStats {
    let targets: Vec<Word> = vocabulary
        .answers()
        .iter()
        .take(limit.unwrap_or(vocabulary.answers().len()))
        .copied()
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut solved = 0usize;
    let mut total_attempts = 0usize;
    let mut failed = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let start = Instant::now();

    for (index, &target) in targets.iter().enumerate() {
        let mut engine = Engine::with_seed(vocabulary, policy, index as u64);
        let mut won_in = None;

        for attempt in 0..MAX_ATTEMPTS {
            let Ok(guess) = engine.choose_word(attempt) else {
                break;
            };
            let pattern = Pattern::calculate(&guess, &target);
            engine.record_feedback(guess, pattern);

            if pattern.is_perfect() {
                won_in = Some(attempt + 1);
                break;
            }
        }

        match won_in {
            Some(attempts) => {
                solved += 1;
                total_attempts += attempts;
                *distribution.entry(attempts).or_insert(0) += 1;
            }
            None => failed.push(target),
        }

        if index % 10 == 0 && solved > 0 {
            let avg = total_attempts as f64 / solved as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let average_attempts = if solved > 0 {
        total_attempts as f64 / solved as f64
    } else {
        0.0
    };

    SimulationStats {
        total_words: targets.len(),
        solved,
        failed,
        distribution,
        average_attempts,
        total_time: start.elapsed(),
    }
}
