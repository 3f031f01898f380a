//! Wordle Advisor - CLI
//!
//! Thin driver over the guessing engine: an interactive assistant, a
//! known-secret solver, and a whole-dictionary simulation.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{run_assist, run_simulation, solve_word},
    output::{print_simulation_stats, print_solve_report},
    solver::Policy,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Word-guessing puzzle assistant with filter, letter-novelty and minimax strategies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: adaptive (default), filter, entropy, minimax
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Seed for the random tie-breaks, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to an answer list file (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Path to a guess list file (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): type the observed pattern per guess
    Assist,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per attempt
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver against every answer word
    Simulate {
        /// Limit the number of answers tested
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = match (&cli.answers, &cli.guesses) {
        (Some(answers), Some(guesses)) => Vocabulary::from_files(answers, guesses)
            .context("failed to load word list files")?,
        (None, None) => Vocabulary::embedded(),
        _ => bail!("--answers and --guesses must be given together"),
    };

    let policy = Policy::from_name(&cli.strategy);

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist(&vocabulary, policy, cli.seed)?,
        Commands::Solve { word, verbose } => {
            let report = solve_word(&vocabulary, policy, cli.seed, &word)
                .with_context(|| format!("could not solve '{word}'"))?;
            print_solve_report(&report, verbose);
        }
        Commands::Simulate { limit } => {
            let stats = run_simulation(&vocabulary, policy, limit);
            print_simulation_stats(&stats);
        }
    }

    Ok(())
}
