//! Quantable: schema inference and quantile bucketing for delimited tables.
//!
//! Quantable classifies each column of a CSV-like table into one of five
//! meaning types (empty, binary, categorical, numeric, textual) and rewrites
//! values into a normalized form: quoted strings for categorical and textual
//! columns, booleans for binary columns, and quantile bucket labels for
//! numeric columns.
//!
//! # Example
//!
//! ```no_run
//! use quantable::Quantable;
//!
//! let quantable = Quantable::new();
//! let result = quantable.process("data.csv").unwrap();
//!
//! for (name, meta) in &result.metadata {
//!     println!("{}: {}", name, meta.meaning_type());
//! }
//! ```

pub mod bucket;
pub mod classify;
pub mod error;
pub mod input;
pub mod metadata;
pub mod normalize;
pub mod value;

mod quantable;

pub use crate::quantable::{AnalysisResult, ProcessResult, Quantable, QuantableConfig};
pub use bucket::{bucketize, quantiles};
pub use classify::{is_binary, storage_types, try_numeric, ColumnClassifier};
pub use error::{QuantableError, Result};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use metadata::ColumnMetadata;
pub use normalize::normalize;
pub use value::{RawValue, StorageKind};
