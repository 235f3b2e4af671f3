//! Quantable CLI - schema inference and quantile bucketing for tables.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            delimiter,
            null_values,
            num_buckets,
            max_unique,
        } => commands::analyze::run(
            file,
            output,
            delimiter,
            null_values,
            num_buckets,
            max_unique,
            cli.verbose,
        ),

        Commands::Process {
            file,
            output,
            metadata,
            delimiter,
            null_values,
            num_buckets,
            max_unique,
        } => commands::process::run(
            file,
            output,
            metadata,
            delimiter,
            null_values,
            num_buckets,
            max_unique,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
