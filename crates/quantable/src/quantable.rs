//! Main Quantable struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::ColumnClassifier;
use crate::error::Result;
use crate::input::{Parser, ParserConfig, RawTable, SourceMetadata};
use crate::metadata::ColumnMetadata;
use crate::normalize::normalize;
use crate::value::RawValue;

/// Configuration for Quantable analysis.
#[derive(Debug, Clone)]
pub struct QuantableConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Number of quantile intervals for numeric columns.
    pub num_buckets: usize,
    /// Cap on the sampled distinct values per column.
    pub max_unique_values: usize,
}

impl Default for QuantableConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            num_buckets: 10,
            max_unique_values: 10,
        }
    }
}

/// Result of analyzing a data file: per-column metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Inferred metadata per column, in header order.
    pub metadata: IndexMap<String, ColumnMetadata>,
}

/// Result of processing a data file: metadata plus the normalized table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Inferred metadata per column, in header order.
    pub metadata: IndexMap<String, ColumnMetadata>,
    /// Normalized values per column, positionally aligned with the input.
    pub columns: IndexMap<String, Vec<RawValue>>,
}

/// The classification and normalization engine.
pub struct Quantable {
    parser: Parser,
    classifier: ColumnClassifier,
}

impl Quantable {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(QuantableConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: QuantableConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            classifier: ColumnClassifier::with_tunables(
                config.num_buckets,
                config.max_unique_values,
            ),
        }
    }

    /// Parse a file and infer per-column metadata.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let metadata = self.classify_table(&table);
        Ok(AnalysisResult { source, metadata })
    }

    /// Parse a file, infer metadata, and normalize every column.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<ProcessResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let metadata = self.classify_table(&table);
        let columns = normalize(&table, &metadata)?;
        Ok(ProcessResult {
            source,
            metadata,
            columns,
        })
    }

    /// Classify every column of an in-memory table. Never fails: the
    /// heuristics are total over well-formed input.
    pub fn classify_table(&self, table: &RawTable) -> IndexMap<String, ColumnMetadata> {
        table
            .iter()
            .map(|(name, values)| (name.to_string(), self.classifier.classify(values)))
            .collect()
    }

    /// Classify and normalize an in-memory table.
    pub fn process_table(
        &self,
        table: &RawTable,
    ) -> Result<(IndexMap<String, ColumnMetadata>, IndexMap<String, Vec<RawValue>>)> {
        let metadata = self.classify_table(table);
        let columns = normalize(table, &metadata)?;
        Ok((metadata, columns))
    }
}

impl Default for Quantable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_csv() {
        let content = "id,flag,color\n1,t,red\n2,f,blue\n3,t,red\n";
        let file = create_test_file(content);

        let quantable = Quantable::new();
        let result = quantable.analyze(file.path()).unwrap();

        assert_eq!(result.source.row_count, 3);
        assert_eq!(result.source.column_count, 3);
        assert_eq!(result.metadata["flag"].meaning_type(), "binary");
        assert_eq!(result.metadata["color"].meaning_type(), "categorical");
    }

    #[test]
    fn test_process_preserves_column_order() {
        let content = "z,a\n1,x\n0,y\n";
        let file = create_test_file(content);

        let quantable = Quantable::new();
        let result = quantable.process(file.path()).unwrap();

        let names: Vec<&String> = result.columns.keys().collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_metadata_round_trips_through_json() {
        let content = "flag\nt\nf\n";
        let file = create_test_file(content);

        let quantable = Quantable::new();
        let result = quantable.analyze(file.path()).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata, result.metadata);
    }
}
