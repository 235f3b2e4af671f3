//! Raw value model: the cell-level sum type and its storage kinds.

use serde::{Deserialize, Serialize};

/// A single cell of a raw table.
///
/// Values arrive either as text (the usual case when ingesting a delimited
/// file) or as already-typed scalars when the table is built in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Missing/absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text value.
    Str(String),
}

/// The concrete representation observed for a value, distinct from the
/// column's inferred meaning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    Boolean,
    Null,
    Number,
    String,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Boolean => "boolean",
            StorageKind::Null => "null",
            StorageKind::Number => "number",
            StorageKind::String => "string",
        }
    }
}

/// Key used for distinct-value counting.
///
/// Numeric values compare across representations: `Int(1)`, `Float(1.0)` and
/// `Bool(true)` all collapse to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Null,
    Int(i64),
    Float(u64),
    Str(String),
}

impl RawValue {
    /// The storage kind of this value.
    pub fn storage_kind(&self) -> StorageKind {
        match self {
            RawValue::Null => StorageKind::Null,
            RawValue::Bool(_) => StorageKind::Boolean,
            RawValue::Int(_) | RawValue::Float(_) => StorageKind::Number,
            RawValue::Str(_) => StorageKind::String,
        }
    }

    /// True for null or the empty string; drives a column's `nullable` flag.
    pub fn is_null_or_empty(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Truthiness: false for null, empty string, numeric zero and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Bool(b) => !b,
            RawValue::Int(i) => *i == 0,
            RawValue::Float(f) => *f == 0.0,
            RawValue::Str(s) => s.is_empty(),
        }
    }

    pub(crate) fn key(&self) -> ValueKey {
        match self {
            RawValue::Null => ValueKey::Null,
            RawValue::Bool(b) => ValueKey::Int(*b as i64),
            RawValue::Int(i) => ValueKey::Int(*i),
            RawValue::Float(f) => {
                // Integral floats share a key with the equivalent integer.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    ValueKey::Int(*f as i64)
                } else {
                    ValueKey::Float(f.to_bits())
                }
            }
            RawValue::Str(s) => ValueKey::Str(s.clone()),
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(i) => write!(f, "{}", i),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}
