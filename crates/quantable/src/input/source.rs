//! In-memory table representation and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::RawValue;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been analyzed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// A column-major table: column name (header order) to ordered values.
///
/// All columns have the same length; the parser enforces this at ingestion
/// and the core never violates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    columns: IndexMap<String, Vec<RawValue>>,
}

impl RawTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Build a table from (name, values) pairs, preserving order.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<RawValue>)>,
        S: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, values)| (name.into(), values))
                .collect(),
        }
    }

    /// Append a column. Replaces any existing column with the same name.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<RawValue>) {
        self.columns.insert(name.into(), values);
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (length of the first column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    /// Column names in header order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    /// Get a column's values by name.
    pub fn column(&self, name: &str) -> Option<&[RawValue]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Iterate over (name, values) pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawValue])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Get a specific cell value.
    pub fn get(&self, column: &str, row: usize) -> Option<&RawValue> {
        self.columns.get(column).and_then(|v| v.get(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_preserved() {
        let table = RawTable::from_columns(vec![
            ("z", vec![RawValue::Int(1)]),
            ("a", vec![RawValue::Int(2)]),
            ("m", vec![RawValue::Int(3)]),
        ]);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_cell_access() {
        let table = RawTable::from_columns(vec![(
            "x",
            vec![RawValue::from("a"), RawValue::from("b")],
        )]);
        assert_eq!(table.get("x", 1), Some(&RawValue::from("b")));
        assert_eq!(table.get("x", 2), None);
        assert_eq!(table.get("y", 0), None);
    }
}
