//! Interactive collaborator loop
//!
//! The engine proposes a word, the user reports the pattern the puzzle
//! showed, and the loop repeats until the session ends. This is the whole
//! protocol an external presentation layer drives; here it runs over stdin.

use crate::core::Pattern;
use crate::solver::{Engine, EngineError, MAX_ATTEMPTS, Policy, SessionOutcome};
use crate::wordlists::Vocabulary;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive assistant over stdin/stdout
///
/// # Errors
/// Returns an error when stdin closes unexpectedly or cannot be read.
pub fn run_assist(vocabulary: &Vocabulary, policy: Policy, seed: Option<u64>) -> Result<()> {
    let mut engine = match seed {
        Some(seed) => Engine::with_seed(vocabulary, policy, seed),
        None => Engine::new(vocabulary, policy),
    };

    println!("Reply with the pattern the puzzle showed for each suggestion.");
    println!(
        "Use {} for correct, {} for present, {} for absent (e.g. gy--g), or 'quit'.\n",
        "g".green().bold(),
        "y".yellow().bold(),
        "-".bright_black().bold()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for attempt in 0..MAX_ATTEMPTS {
        let guess = match engine.choose_word(attempt) {
            Ok(word) => word,
            Err(EngineError::NoCandidate) => {
                println!(
                    "{}",
                    "No known word fits that feedback; the secret is outside my dictionary."
                        .red()
                );
                return Ok(());
            }
            Err(other) => return Err(other.into()),
        };

        println!(
            "Attempt {}: try {}  ({} candidates left)",
            attempt + 1,
            guess.as_str().to_uppercase().bright_yellow().bold(),
            engine.remaining()
        );

        let pattern = loop {
            print!("pattern> ");
            io::stdout().flush().context("failed to flush stdout")?;

            let line = lines
                .next()
                .context("stdin closed before the session ended")?
                .context("failed to read from stdin")?;
            let line = line.trim();

            if line.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            match Pattern::parse(line) {
                Some(pattern) => break pattern,
                None => println!("Enter five of g/y/- (e.g. gy--g), or 'quit'."),
            }
        };

        engine.record_feedback(guess, pattern);

        if engine.outcome() == Some(SessionOutcome::Won) {
            println!("\n{}", format!("Solved in {} attempts!", attempt + 1).green().bold());
            return Ok(());
        }
    }

    println!("\n{}", "Out of attempts, that one got away.".red());
    Ok(())
}
