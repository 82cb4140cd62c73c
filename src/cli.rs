//! CLI definitions using clap.
//!
//! - run: schedule durations given inline or from a JSON request file
//! - demo: schedule the built-in sample workloads

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pool-lpt - LPT scheduling onto multi-threaded workers
#[derive(Parser, Debug)]
#[command(name = "pool-lpt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Schedule a batch of jobs
    Run {
        /// Number of workers
        #[arg(short, long, required_unless_present = "input")]
        workers: Option<usize>,

        /// Threads per worker
        #[arg(short, long, required_unless_present = "input")]
        threads: Option<usize>,

        /// JSON request file ({"workers", "threads_per_worker", "durations"})
        #[arg(short, long, conflicts_with_all = ["workers", "threads", "durations"])]
        input: Option<PathBuf>,

        /// Job durations, in input order
        #[arg(allow_negative_numbers = true)]
        durations: Vec<f64>,
    },

    /// Schedule the built-in sample workloads
    Demo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Timeline and summary text
    Text,
    /// Outcome and summary as JSON
    Json,
}
