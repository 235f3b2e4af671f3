//! Column classification: storage-kind sniffing and the meaning-type cascade.

mod classifier;
mod sniff;

pub use classifier::ColumnClassifier;
pub use sniff::{is_binary, storage_types, try_numeric};

pub(crate) use sniff::parse_number;
