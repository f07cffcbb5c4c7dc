//! Wordle Marathon - CLI
//!
//! Hunts for adversarially long Wordle games: sequences of consistent
//! guesses that put off finding the target as long as possible.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordle_marathon::{
    commands::{HuntConfig, run_extend, run_hunt, run_score, run_verify},
    core::Word,
    wordlists::{DICTIONARY, TARGETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_marathon",
    about = "Adversarial Wordle analyzer that hunts for maximally long games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'full' (default), 'targets' (hunt within targets only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "full")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Hunt for record-length games across all targets (default)
    Hunt {
        /// Wall-clock budget per target, in seconds
        #[arg(short, long, default_value = "20")]
        seconds: u64,

        /// Passes over the target list; 0 runs forever
        #[arg(short, long, default_value = "1")]
        passes: u64,

        /// Fan targets out over all CPU cores
        #[arg(long)]
        parallel: bool,

        /// Seed for dictionary shuffling (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Hunt a single target word only
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Insert one extra guess into a known sequence (last word is the target)
    Extend {
        /// The guess sequence, in play order
        words: Vec<String>,

        /// Stop after this many improvements
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Replay a guess sequence and validate every step
    Verify {
        /// The guess sequence, in play order
        words: Vec<String>,
    },

    /// Show the feedback pattern for one guess against one target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden target word
        target: String,
    },
}

/// Load word lists based on the -w flag
///
/// Returns (`guess_dictionary`, `target_candidates`)
/// - "full": the whole guess dictionary, official targets as hidden words
/// - "targets": targets only for both (smaller, faster hunts)
/// - "<path>": load a custom word list, used for both roles
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_marathon::wordlists::loader::load_from_file;

    match wordlist_mode {
        "full" => {
            let dictionary = words_from_slice(DICTIONARY);
            let targets = words_from_slice(TARGETS);
            Ok((dictionary, targets))
        }
        "targets" => {
            let targets = words_from_slice(TARGETS);
            Ok((targets.clone(), targets))
        }
        path => {
            let custom = load_from_file(path)?;
            anyhow::ensure!(!custom.is_empty(), "No valid words in {path}");
            Ok((custom.clone(), custom))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (dictionary, targets) = load_wordlists(&cli.wordlist)?;

    // Default to a single hunt pass if no command given
    let command = cli.command.unwrap_or(Commands::Hunt {
        seconds: 20,
        passes: 1,
        parallel: false,
        seed: None,
        target: None,
    });

    match command {
        Commands::Hunt {
            seconds,
            passes,
            parallel,
            seed,
            target,
        } => run_hunt_command(&dictionary, &targets, seconds, passes, parallel, seed, target),
        Commands::Extend { words, limit } => {
            let guesses = parse_words(&words)?;
            let improved = run_extend(&dictionary, &guesses, limit)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{improved} improved sequence(s) found");
            Ok(())
        }
        Commands::Verify { words } => {
            let guesses = parse_words(&words)?;
            run_verify(&guesses).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, target } => {
            run_score(&guess, &target).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_hunt_command(
    dictionary: &[Word],
    targets: &[Word],
    seconds: u64,
    passes: u64,
    parallel: bool,
    seed: Option<u64>,
    target: Option<String>,
) -> Result<()> {
    let targets = match target {
        Some(text) => {
            let word = Word::new(text.as_str())
                .map_err(|e| anyhow::anyhow!("Invalid target '{text}': {e}"))?;
            anyhow::ensure!(
                targets.contains(&word) || dictionary.contains(&word),
                "Target '{text}' is not in the word list"
            );
            vec![word]
        }
        None => targets.to_vec(),
    };

    println!(
        "Hunting {} target(s) with {} guess words, {}s per target",
        targets.len(),
        dictionary.len(),
        seconds
    );

    let config = HuntConfig {
        budget: Duration::from_secs(seconds),
        passes,
        parallel,
        seed,
    };
    run_hunt(dictionary, &targets, &config);

    Ok(())
}

fn parse_words(texts: &[String]) -> Result<Vec<Word>> {
    texts
        .iter()
        .map(|text| {
            Word::new(text.as_str()).map_err(|e| anyhow::anyhow!("Invalid word '{text}': {e}"))
        })
        .collect()
}
