//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,

    /// Rewrite sequences in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use anyhow::{ensure, Result as AnyhowResult};
use std::path::Path;
use std::time::Instant;
use subword_tokenizer::{TextLoader, Tokenizer};

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be at least 1");

    let text = TextLoader::load(Path::new(&cmd.input))?;
    let tokenizer = Tokenizer::builder().parallel(cmd.parallel).build()?;

    println!("Benchmarking tokenize + count pairs + merge...");
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", cmd.iterations);
    println!("  Parallel: {}", cmd.parallel);
    println!();

    // Warm up and size the corpus once
    let words = tokenizer.tokenize(&text).len();

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        let _ = tokenizer.merge_step(&text);
    }
    let elapsed = start.elapsed();

    let avg_time_ms = elapsed.as_secs_f64() * 1000.0 / cmd.iterations as f64;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    if avg_time_ms > 0.0 {
        println!("  Throughput: {:.0} words/s", words as f64 / avg_time_ms * 1000.0);
    }

    Ok(())
}
