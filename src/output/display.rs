//! Display functions for command results

use super::formatters::{create_progress_bar, format_chain, format_sides};
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// Improvements were already printed while searching unless `verbose`, in
/// which case they are listed again along with search statistics.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}  (max {} words, {} legal words)",
        format_sides(&result.puzzle).bright_yellow().bold(),
        result.max_words,
        result.legal_words
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, solution) in result.improvements.iter().enumerate() {
            println!(
                "  {:>2}. {} ({} letters)",
                i + 1,
                format_chain(solution.words()),
                solution.letter_count()
            );
        }

        let stats = &result.stats;
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Chains explored:    {}", stats.chains_explored);
        println!("   No new letters:     {}", stats.pruned_no_new_letters);
        println!("   Pruned by bound:    {}", stats.pruned_by_bound);
        println!("   Solutions reported: {}", stats.solutions_reported);
        if stats.stopped_at_lower_bound {
            println!("   Stopped early:      best possible length reached");
        }
        println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    }

    println!();
    match result.best() {
        Some(best) => println!(
            "{} {} {}",
            "✅ Best:".green().bold(),
            format_chain(best.words()).bright_white().bold(),
            format!("({} letters)", best.letter_count()).green()
        ),
        None => println!(
            "{}",
            format!(
                "❌ No solution found within {} words",
                result.max_words
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of puzzle analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE ANALYSIS:".bright_cyan().bold(),
        format_sides(&result.puzzle).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} legal words out of {} candidates",
        result.legal_words.to_string().bright_yellow(),
        result.candidate_words
    );
    if let Some(longest) = &result.longest {
        println!("   Longest:     {} ({} letters)", longest, longest.len());
    }
    if let Some((widest, distinct)) = &result.widest {
        println!("   Most letters: {widest} ({distinct} distinct)");
    }

    println!("\n📈 {}", "Words by first letter:".bright_cyan().bold());
    let max_count = result
        .by_start
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);
    for &(letter, count) in &result.by_start {
        let bar = create_progress_bar(count, max_count, 30);
        println!("   {}: {} {count:5}", letter.to_ascii_uppercase(), bar.green());
    }

    if let Some((letter, words)) = &result.listed {
        println!(
            "\n📝 {} {}",
            "Words starting with".bright_cyan().bold(),
            letter.to_ascii_uppercase().to_string().bright_yellow()
        );
        if words.is_empty() {
            println!("   (none)");
        }
        for word in words {
            println!("   {word}");
        }
    }
}
