//! Recognize command - Classify words with the `(ab)+(cd)*` automaton

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::format_verdict,
    recognizer::{self, DEMO_WORDS},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Classify words with the (ab)+(cd)* recognizer")]
pub struct RecognizeArgs {
    /// Words to classify (defaults to a built-in list of examples)
    pub words: Vec<String>,
}

impl RecognizeArgs {
    fn words(&self) -> Vec<&str> {
        if self.words.is_empty() {
            DEMO_WORDS.to_vec()
        } else {
            self.words.iter().map(String::as_str).collect()
        }
    }
}

pub fn execute(args: RecognizeArgs) -> Result<()> {
    for word in args.words() {
        let recognition = recognizer::run(word.chars());
        log::debug!(
            "{word:?}: stopped in {} after {} symbols",
            recognition.state,
            recognition.consumed
        );
        println!("{}", format_verdict(word, recognition.accepted()));
    }
    Ok(())
}
