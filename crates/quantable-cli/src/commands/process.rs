//! Process command - classify, normalize and export the processed table.

use std::path::{Path, PathBuf};

use colored::Colorize;
use quantable::{ProcessResult, Quantable};

use super::{build_config, default_output};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    metadata: Option<PathBuf>,
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
        "Processing".cyan().bold(),
        file.display().to_string().white()
    );

    let config = build_config(delimiter, null_values, num_buckets, max_unique);
    let quantable = Quantable::with_config(config);
    let result = quantable.process(&file)?;

    if verbose {
        for (name, meta) in &result.metadata {
            println!("  {:24} {}", name, meta.meaning_type());
        }
    }

    let output = output.unwrap_or_else(|| default_output(&file, ".processed.csv"));
    write_csv(&result, &output)?;

    println!(
        "{} {} ({} rows, {} columns)",
        "Wrote".green().bold(),
        output.display().to_string().white(),
        result.source.row_count,
        result.source.column_count
    );

    if let Some(metadata_path) = metadata {
        std::fs::write(&metadata_path, serde_json::to_string_pretty(&result.metadata)?)?;
        println!(
            "{} {}",
            "Wrote".green().bold(),
            metadata_path.display().to_string().white()
        );
    }

    Ok(())
}

/// Export the processed columns back to row-major CSV.
fn write_csv(result: &ProcessResult, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    let headers: Vec<&String> = result.columns.keys().collect();
    writer.write_record(&headers)?;

    let row_count = result
        .columns
        .values()
        .next()
        .map(|v| v.len())
        .unwrap_or(0);

    for row in 0..row_count {
        let record: Vec<String> = result
            .columns
            .values()
            .map(|values| values[row].to_string())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
