//! Command implementations.

pub mod analyze;
pub mod process;

use std::path::{Path, PathBuf};

use quantable::{ParserConfig, QuantableConfig};

/// Build an engine configuration from the shared CLI flags.
pub fn build_config(
    delimiter: Option<char>,
    null_values: Vec<String>,
    num_buckets: usize,
    max_unique: usize,
) -> QuantableConfig {
    QuantableConfig {
        parser: ParserConfig {
            delimiter: delimiter.map(|c| c as u8),
            null_values,
            ..ParserConfig::default()
        },
        num_buckets,
        max_unique_values: max_unique,
    }
}

/// Default output path: the input path with an extra suffix.
pub fn default_output(file: &Path, suffix: &str) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
