//! Terminal reporting for command results

use crate::commands::{SimulationStats, SolveReport};
use crate::solver::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the trail of a solved (or failed) target
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nAttempt {}: {} {}",
            i + 1,
            step.word.as_str().to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("Solved in {} attempts!", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!("{}", "Not solved within the attempt budget.".red().bold());
    }
}

/// Print aggregate simulation statistics
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(60));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Words tested:   {}", stats.total_words);
    println!(
        "  Solved:         {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed:         {} {}",
            stats.failed.len(),
            format!(
                "({:.1}%)",
                stats.failed.len() as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average:        {}",
        format!("{:.3} attempts", stats.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:     {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Attempt Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for attempts in 1..=MAX_ATTEMPTS {
        let count = stats.distribution.get(&attempts).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (count * 40 / max_count).max(usize::from(count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {attempts} attempts: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.failed.is_empty() {
        println!("\n{}", "Unsolved Words".yellow().bold());
        for word in stats.failed.iter().take(10) {
            println!("  {}", word.as_str().to_uppercase().yellow());
        }
    }
}
