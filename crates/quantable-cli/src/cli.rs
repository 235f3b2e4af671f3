//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quantable: schema inference and quantile bucketing for delimited tables
#[derive(Parser)]
#[command(name = "quantable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer per-column metadata for a data file
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for metadata JSON (default: <file>.metadata.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Tokens to treat as null (repeatable)
        #[arg(long = "null", value_name = "TOKEN")]
        null_values: Vec<String>,

        /// Number of quantile intervals for numeric columns
        #[arg(long, default_value = "10")]
        num_buckets: usize,

        /// Cap on sampled unique values per column
        #[arg(long, default_value = "10")]
        max_unique: usize,
    },

    /// Classify columns and export the normalized table
    Process {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the processed CSV (default: <file>.processed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write metadata JSON to this path
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Tokens to treat as null (repeatable)
        #[arg(long = "null", value_name = "TOKEN")]
        null_values: Vec<String>,

        /// Number of quantile intervals for numeric columns
        #[arg(long, default_value = "10")]
        num_buckets: usize,

        /// Cap on sampled unique values per column
        #[arg(long, default_value = "10")]
        max_unique: usize,
    },
}
