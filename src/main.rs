//! Wordle Trie Solver - CLI
//!
//! Constraint-propagation Wordle solver with interactive, self-play and
//! benchmark modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use wordle_trie::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_word},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Wordle solver using letter-constraint propagation over a pruned candidate trie",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum guesses per puzzle
    #[arg(short = 'n', long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Wordlist: 'embedded' (default) or a path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to filter a custom wordlist down to
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): propose guesses, you type the colors back
    Play,

    /// Solve a known target word, showing each round
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-round candidate counts and raw feedback
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve randomly drawn words and report statistics
    Benchmark {
        /// Number of rounds to play
        #[arg(short = 'c', long, default_value_t = 100)]
        rounds: usize,
    },
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist_mode: &str, word_len: usize) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path, word_len)?;
            if words.is_empty() {
                bail!("no {word_len}-letter words found in {path}");
            }
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.wordlist, cli.length)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&vocabulary, cli.max_guesses),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig {
                target: word,
                max_guesses: cli.max_guesses,
            };
            let result = solve_word(&config, &vocabulary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { rounds } => {
            let config = BenchmarkConfig {
                rounds,
                max_guesses: cli.max_guesses,
            };
            let result = run_benchmark(&vocabulary, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
