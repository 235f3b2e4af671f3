//! Value-level heuristics: storage kinds, binary detection, numeric coercion.

use std::collections::BTreeSet;

use crate::value::{RawValue, StorageKind};

/// Text forms accepted as boolean, compared case-insensitively.
const BOOLEAN_WORDS: &[&str] = &["t", "f", "true", "false", "0", "1"];

/// The sorted set of storage kinds observed across the values.
pub fn storage_types(values: &[RawValue]) -> Vec<StorageKind> {
    let kinds: BTreeSet<StorageKind> = values.iter().map(|v| v.storage_kind()).collect();
    kinds.into_iter().collect()
}

/// Whether every value can be read as a boolean.
///
/// Nulls are ignored; text must be one of `t/f/true/false/0/1` (any case);
/// numbers must equal exactly 0 or 1. The scan stops at the first
/// disqualifying value, in input order.
pub fn is_binary(values: &[RawValue]) -> bool {
    for value in values {
        match value {
            RawValue::Null | RawValue::Bool(_) => {}
            RawValue::Str(s) => {
                if !BOOLEAN_WORDS.iter().any(|w| s.eq_ignore_ascii_case(w)) {
                    return false;
                }
            }
            RawValue::Int(i) => {
                if *i != 0 && *i != 1 {
                    return false;
                }
            }
            RawValue::Float(f) => {
                if *f != 0.0 && *f != 1.0 {
                    return false;
                }
            }
        }
    }
    true
}

/// Coerce every value to a number, all-or-nothing.
///
/// Nulls are skipped (not appended, not a failure); booleans coerce to 0/1;
/// text is parsed as integer first, then float. The first unparseable value
/// disqualifies the whole column and returns `None`.
pub fn try_numeric(values: &[RawValue]) -> Option<Vec<f64>> {
    let mut numbers = Vec::with_capacity(values.len());
    for value in values {
        match value {
            RawValue::Null => {}
            RawValue::Bool(b) => numbers.push(if *b { 1.0 } else { 0.0 }),
            RawValue::Int(i) => numbers.push(*i as f64),
            RawValue::Float(f) => numbers.push(*f),
            RawValue::Str(s) => numbers.push(parse_number(s)?),
        }
    }
    Some(numbers)
}

/// Parse text as a number: integer first, then float.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(i as f64);
    }
    trimmed.parse::<f64>().ok()
}
