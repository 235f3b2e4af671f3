//! Analyze command - infer per-column metadata and write it as JSON.

use std::path::PathBuf;

use colored::Colorize;
use quantable::{ColumnMetadata, Quantable};

use super::{build_config, default_output};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    delimiter: Option<char>,
    null_values: Vec<String>,
    num_buckets: usize,
    max_unique: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );

    let config = build_config(delimiter, null_values, num_buckets, max_unique);
    let quantable = Quantable::with_config(config);
    let result = quantable.analyze(&file)?;

    println!(
        "{} rows, {} columns ({})",
        result.source.row_count.to_string().white().bold(),
        result.source.column_count.to_string().white().bold(),
        result.source.format
    );

    for (name, meta) in &result.metadata {
        let tag = match meta {
            ColumnMetadata::Empty => "empty".dimmed(),
            ColumnMetadata::Binary { .. } => "binary".green(),
            ColumnMetadata::Categorical { .. } => "categorical".blue(),
            ColumnMetadata::Numeric { .. } => "numeric".yellow(),
            ColumnMetadata::Textual { .. } => "textual".magenta(),
        };
        println!("  {:24} {}", name, tag);

        if verbose {
            match meta {
                ColumnMetadata::Numeric {
                    buckets,
                    min,
                    median,
                    max,
                    nullable,
                } => {
                    println!(
                        "    min={} median={} max={} nullable={} buckets={:?}",
                        min, median, max, nullable, buckets
                    );
                }
                ColumnMetadata::Binary {
                    number_of_unique_values,
                    nullable,
                    ..
                }
                | ColumnMetadata::Categorical {
                    number_of_unique_values,
                    nullable,
                    ..
                }
                | ColumnMetadata::Textual {
                    number_of_unique_values,
                    nullable,
                    ..
                } => {
                    println!(
                        "    unique={} nullable={}",
                        number_of_unique_values, nullable
                    );
                }
                ColumnMetadata::Empty => {}
            }
        }
    }

    let output = output.unwrap_or_else(|| default_output(&file, ".metadata.json"));
    std::fs::write(&output, serde_json::to_string_pretty(&result)?)?;

    println!(
        "{} {}",
        "Wrote".green().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
