//! Ingestion: delimited-file parsing and the in-memory table model.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{RawTable, SourceMetadata};
