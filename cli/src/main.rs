//! Subword CLI - Command-line interface for the BPE subword tokenizer.
//!
//! This is the main entry point for the `subword` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{BenchmarkCommand, MergeCommand, TokenizeCommand, VocabCommand};

#[derive(Parser)]
#[command(name = "subword")]
#[command(about = "A minimal BPE subword tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into normalized word tokens
    Tokenize(TokenizeCommand),
    /// Print the vocabulary ranked by frequency
    Vocab(VocabCommand),
    /// Apply one BPE merge step to the subwords of a text
    Merge(MergeCommand),
    /// Benchmark the tokenization pipeline
    Benchmark(BenchmarkCommand),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
        Commands::Merge(cmd) => commands::merge::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
