//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Input text file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Print tokens as a JSON array
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use subword_tokenizer::{TextLoader, Tokenizer};

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let text = TextLoader::load_source(&cmd.input)?;
    let tokens = Tokenizer::default().tokenize(&text);
    log::info!("{} tokens", tokens.len());

    if cmd.json {
        println!("{}", serde_json::to_string(&tokens)?);
    } else {
        println!("{}", tokens.join(" "));
    }

    Ok(())
}
