//! automata-search CLI
//!
//! Runs two independent exercises:
//! - a finite-state recognizer for `(ab)+(cd)*`
//! - a comparison of minimax and alpha-beta search on a random game tree
//!
//! With no subcommand both run with their defaults, recognizer first.

use anyhow::Result;
use automata_search::{
    cli::commands::{
        compare::{self, CompareArgs},
        recognize::{self, RecognizeArgs},
    },
    utils::init_logger,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "automata-search")]
#[command(version, about = "Pattern recognizer and game-tree search comparison", long_about = None)]
struct Cli {
    /// Log level spec for stderr diagnostics (e.g. `info`, `automata_search=debug`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify words with the (ab)+(cd)* recognizer
    Recognize(RecognizeArgs),

    /// Compare minimax and alpha-beta search on a random game tree
    Compare(CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli.log_level)?;

    match cli.command {
        Some(Commands::Recognize(args)) => recognize::execute(args),
        Some(Commands::Compare(args)) => compare::execute(args),
        None => {
            recognize::execute(RecognizeArgs::default())?;
            println!();
            compare::execute(CompareArgs::default())
        }
    }
}
