//! Vocab command implementation.

use clap::Parser;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    /// Input text file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Only print the N most frequent tokens
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Print entries as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use subword_tokenizer::{TextLoader, Tokenizer};

pub fn run(cmd: VocabCommand) -> AnyhowResult<()> {
    let text = TextLoader::load_source(&cmd.input)?;
    let vocab = Tokenizer::default().vocabulary(&text);
    log::info!("{} distinct tokens", vocab.len());

    let entries = match cmd.top {
        Some(n) => vocab.top(n),
        None => vocab.entries(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}\t{}", entry.count, entry.token);
        }
    }

    Ok(())
}
