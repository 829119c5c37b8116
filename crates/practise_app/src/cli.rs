use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "practise", about = "Fibonacci and word count exercises.")]
pub struct Cli {
    /// Path to a RON config file. Defaults to `./practise.ron` when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the first N Fibonacci numbers, one per line.
    Fib {
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Count whitespace-delimited words in the given text.
    Wordcount {
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the mapping as a JSON object.
        #[arg(long)]
        json: bool,
    },
    /// Run the word count harness against the built-in counter.
    WcTest {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        random_cases: Option<usize>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}
