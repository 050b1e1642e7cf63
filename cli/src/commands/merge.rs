//! Merge command implementation.

use clap::Parser;

/// Merge command arguments.
#[derive(Parser)]
pub struct MergeCommand {
    /// Input text file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Rewrite sequences in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Print the outcome as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use subword_tokenizer::{TextLoader, Tokenizer};

pub fn run(cmd: MergeCommand) -> AnyhowResult<()> {
    let text = TextLoader::load_source(&cmd.input)?;
    let tokenizer = Tokenizer::builder().parallel(cmd.parallel).build()?;

    let outcome = tokenizer.merge_step(&text);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome.merged {
        Some(((left, right), count)) => {
            log::info!("merged ({}, {}) x{}", left, right, count);
            println!("merge: {} + {} -> {}{} (count {})", left, right, left, right, count);
        }
        None => println!("merge: none"),
    }
    for sequence in &outcome.sequences {
        println!("{}", sequence);
    }

    Ok(())
}
