//! Column metadata: the inferred meaning type and its descriptive fields.

use serde::{Deserialize, Serialize};

use crate::value::{RawValue, StorageKind};

/// Marker appended to a unique-value sample that was capped.
pub const TRUNCATED_MARKER: &str = "TRUNCATED";

/// Metadata for a single column, tagged by its inferred meaning type.
///
/// Metadata is a pure function of the column's values and the classifier
/// tunables; it is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "meaning_type", rename_all = "snake_case")]
pub enum ColumnMetadata {
    /// A column with no values at all.
    Empty,
    /// Every value reads as true/false.
    Binary {
        storage_types: Vec<StorageKind>,
        unique_values: Vec<RawValue>,
        number_of_unique_values: usize,
        nullable: bool,
    },
    /// Low cardinality relative to row count.
    Categorical {
        storage_types: Vec<StorageKind>,
        unique_values: Vec<RawValue>,
        number_of_unique_values: usize,
        nullable: bool,
    },
    /// Every value parses as a number; described by quantile boundaries.
    Numeric {
        /// Ascending quantile boundaries, rounded to 2 decimals.
        buckets: Vec<f64>,
        min: f64,
        median: f64,
        max: f64,
        nullable: bool,
    },
    /// High-cardinality, non-numeric.
    Textual {
        storage_types: Vec<StorageKind>,
        unique_values: Vec<RawValue>,
        number_of_unique_values: usize,
        nullable: bool,
    },
}

impl ColumnMetadata {
    /// The meaning type tag as a string.
    pub fn meaning_type(&self) -> &'static str {
        match self {
            ColumnMetadata::Empty => "empty",
            ColumnMetadata::Binary { .. } => "binary",
            ColumnMetadata::Categorical { .. } => "categorical",
            ColumnMetadata::Numeric { .. } => "numeric",
            ColumnMetadata::Textual { .. } => "textual",
        }
    }

    /// Whether the column contained a null or empty-string value.
    pub fn nullable(&self) -> bool {
        match self {
            ColumnMetadata::Empty => false,
            ColumnMetadata::Binary { nullable, .. }
            | ColumnMetadata::Categorical { nullable, .. }
            | ColumnMetadata::Numeric { nullable, .. }
            | ColumnMetadata::Textual { nullable, .. } => *nullable,
        }
    }
}
