//! Letter Boxed Solver - CLI
//!
//! Loads a dictionary, validates the puzzle sides and searches for the
//! shortest covering word chain, printing each improvement as it is found.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use letter_boxed::{
    commands::{DEFAULT_MAX_WORDS, SolveConfig, analyze_puzzle, solve_puzzle},
    core::Puzzle,
    log::init_logger,
    output::{print_analysis_result, print_solve_result},
    solver::Solver,
    wordlists::load_from_file,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver finding the word chain with the fewest letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to dictionary file (whitespace separated words)
    #[arg(short, long)]
    dict: PathBuf,

    /// Four sides of the puzzle, each as a string of 3 letters
    #[arg(short, long, num_args = 4, required = true, value_name = "SIDE")]
    sides: Vec<String>,

    /// Maximum number of words in a solution
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Enable debug logging (`RUST_LOG` overrides)
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the shortest solution (default)
    Solve {
        /// Show every improvement and search statistics at the end
        #[arg(short, long)]
        verbose: bool,

        /// Hide the spinner and live progress lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show statistics about the puzzle's legal words
    Analyze {
        /// List the legal words starting with this letter
        #[arg(short, long)]
        letter: Option<char>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    // Validate sides before touching the dictionary
    let puzzle = Puzzle::new(&cli.sides)?;
    let words = load_from_file(&cli.dict)
        .with_context(|| format!("Failed to read dictionary {}", cli.dict.display()))?;
    let solver = Solver::new(puzzle, &words)?;

    let command = cli.command.unwrap_or(Commands::Solve {
        verbose: false,
        quiet: false,
    });

    match command {
        Commands::Solve { verbose, quiet } => {
            run_solve_command(&solver, cli.max_words, verbose, quiet)
        }
        Commands::Analyze { letter } => {
            let result = analyze_puzzle(&solver, words.len(), letter);
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver,
    max_words: usize,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!(
            "{}",
            format!("Searching for solutions of at most {max_words} words...").bright_black()
        );
    }

    let config = SolveConfig {
        max_words,
        show_progress: !quiet,
    };
    let result = solve_puzzle(&config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}
