//! Value normalization: rewrite raw values into their processed form
//! according to previously computed column metadata.

use indexmap::IndexMap;

use crate::bucket::interval_label;
use crate::classify::parse_number;
use crate::error::{QuantableError, Result};
use crate::input::RawTable;
use crate::metadata::ColumnMetadata;
use crate::value::RawValue;

/// Rewrite every column of `table` according to `metadata`.
///
/// The metadata is a contract: a column tagged numeric whose value fails to
/// parse as a number is a fatal error, since metadata and data have diverged.
/// Every column is processed; output sequences are positionally aligned with
/// the input.
pub fn normalize(
    table: &RawTable,
    metadata: &IndexMap<String, ColumnMetadata>,
) -> Result<IndexMap<String, Vec<RawValue>>> {
    let mut processed = IndexMap::new();

    for (name, values) in table.iter() {
        let meta = metadata
            .get(name)
            .ok_or_else(|| QuantableError::MissingMetadata {
                column: name.to_string(),
            })?;

        let column = match meta {
            ColumnMetadata::Empty => values.to_vec(),
            ColumnMetadata::Categorical { .. } | ColumnMetadata::Textual { .. } => {
                values.iter().map(quote_strings).collect()
            }
            ColumnMetadata::Binary { .. } => values.iter().map(to_boolean).collect(),
            ColumnMetadata::Numeric { buckets, .. } => values
                .iter()
                .map(|v| to_bucket_label(name, v, buckets))
                .collect::<Result<Vec<_>>>()?,
        };

        processed.insert(name.to_string(), column);
    }

    Ok(processed)
}

/// Wrap text in literal double quotes; everything else passes through.
fn quote_strings(value: &RawValue) -> RawValue {
    match value {
        RawValue::Str(s) => RawValue::Str(format!("\"{}\"", s)),
        other => other.clone(),
    }
}

/// Collapse a value to a boolean.
///
/// Numbers map zero/non-zero to false/true; text is lower-cased and matched
/// against `f`/`false`/`0`; anything else maps via its own truthiness.
fn to_boolean(value: &RawValue) -> RawValue {
    let b = match value {
        RawValue::Bool(b) => return RawValue::Bool(*b),
        RawValue::Int(i) => *i != 0,
        RawValue::Float(f) => *f != 0.0,
        RawValue::Str(s) => {
            let lowered = s.to_lowercase();
            !matches!(lowered.as_str(), "f" | "false" | "0")
        }
        RawValue::Null => false,
    };
    RawValue::Bool(b)
}

/// Replace a numeric value with its bucket label.
///
/// Falsy cells (null, empty string, zero, false) pass through unbucketed.
fn to_bucket_label(column: &str, value: &RawValue, buckets: &[f64]) -> Result<RawValue> {
    if value.is_falsy() {
        return Ok(value.clone());
    }

    let number = match value {
        // Null is falsy and already passed through above.
        RawValue::Null => return Ok(value.clone()),
        RawValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        RawValue::Int(i) => *i as f64,
        RawValue::Float(f) => *f,
        RawValue::Str(s) => parse_number(s).ok_or_else(|| QuantableError::CoercionContract {
            column: column.to_string(),
            value: s.clone(),
        })?,
    };

    if buckets.is_empty() {
        return Ok(RawValue::Str(format!("-inf<{}<inf", column)));
    }

    Ok(RawValue::Str(interval_label(number, buckets, column)))
}
