//! Per-column meaning-type classification.

use indexmap::IndexSet;

use super::sniff::{is_binary, storage_types, try_numeric};
use crate::bucket::quantiles;
use crate::metadata::{ColumnMetadata, TRUNCATED_MARKER};
use crate::value::RawValue;

/// Classifies a column's values into one of the five meaning types.
///
/// The tunables are explicit: `num_buckets` controls the number of quantile
/// intervals for numeric columns, `max_unique_values` caps the reported
/// unique-value sample.
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
    num_buckets: usize,
    max_unique_values: usize,
}

impl ColumnClassifier {
    /// Create a classifier with the default tunables (10 buckets, 10 samples).
    pub fn new() -> Self {
        Self {
            num_buckets: 10,
            max_unique_values: 10,
        }
    }

    /// Create a classifier with explicit tunables.
    pub fn with_tunables(num_buckets: usize, max_unique_values: usize) -> Self {
        Self {
            num_buckets,
            max_unique_values,
        }
    }

    /// Classify a column. First match wins:
    ///
    /// 1. no values at all -> empty
    /// 2. every value reads as boolean -> binary
    /// 3. low cardinality relative to row count -> categorical
    /// 4. every value coerces to a number -> numeric, else textual
    pub fn classify(&self, values: &[RawValue]) -> ColumnMetadata {
        if values.is_empty() {
            return ColumnMetadata::Empty;
        }

        // Distinct values in first-seen order. Numeric representations that
        // compare equal (1, 1.0, true) collapse to one distinct value.
        let mut seen = IndexSet::new();
        let mut sample = Vec::new();
        for value in values {
            if seen.insert(value.key()) {
                sample.push(value.clone());
            }
        }
        let number_of_unique_values = seen.len();

        let nullable = values.iter().any(|v| v.is_null_or_empty());

        let mut unique_values = sample;
        if number_of_unique_values > self.max_unique_values {
            unique_values.truncate(self.max_unique_values);
            unique_values.push(RawValue::Str(TRUNCATED_MARKER.to_string()));
        }

        let kinds = storage_types(values);

        if is_binary(values) {
            return ColumnMetadata::Binary {
                storage_types: kinds,
                unique_values,
                number_of_unique_values,
                nullable,
            };
        }

        // Low cardinality relative to row count, with a floor so small tables
        // are not forced categorical by a trivial log.
        let threshold = 10.0 * (values.len() as f64).log10().max(1.0);
        if number_of_unique_values as f64 <= threshold {
            return ColumnMetadata::Categorical {
                storage_types: kinds,
                unique_values,
                number_of_unique_values,
                nullable,
            };
        }

        if let Some(numbers) = try_numeric(values) {
            if !numbers.is_empty() {
                let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
                let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                return ColumnMetadata::Numeric {
                    buckets: quantiles(&numbers, self.num_buckets),
                    min,
                    median: median(&numbers),
                    max,
                    nullable,
                };
            }
        }

        ColumnMetadata::Textual {
            storage_types: kinds,
            unique_values,
            number_of_unique_values,
            nullable,
        }
    }
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Median of an unsorted sample, averaging the two middle values on even
/// counts.
fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StorageKind;

    fn strings(values: &[&str]) -> Vec<RawValue> {
        values.iter().map(|&v| RawValue::from(v)).collect()
    }

    #[test]
    fn test_median_odd_and_even_counts() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 100.0]), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_empty_column() {
        let classifier = ColumnClassifier::new();
        assert_eq!(classifier.classify(&[]), ColumnMetadata::Empty);
    }

    #[test]
    fn test_binary_column() {
        let classifier = ColumnClassifier::new();
        let meta = classifier.classify(&strings(&["t", "f", "TRUE", "0", "1"]));
        match meta {
            ColumnMetadata::Binary {
                storage_types,
                number_of_unique_values,
                nullable,
                ..
            } => {
                assert_eq!(storage_types, vec![StorageKind::String]);
                assert_eq!(number_of_unique_values, 5);
                assert!(!nullable);
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_na_string_disqualifies_binary() {
        let classifier = ColumnClassifier::new();
        let meta = classifier.classify(&strings(&["1", "0", "true", "NA"]));
        assert_eq!(meta.meaning_type(), "categorical");
    }

    #[test]
    fn test_categorical_low_cardinality() {
        let classifier = ColumnClassifier::new();
        let meta = classifier.classify(&strings(&["red", "green", "blue", "red", "red"]));
        match meta {
            ColumnMetadata::Categorical {
                unique_values,
                number_of_unique_values,
                ..
            } => {
                assert_eq!(number_of_unique_values, 3);
                assert_eq!(unique_values, strings(&["red", "green", "blue"]));
            }
            other => panic!("expected categorical, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_high_cardinality() {
        let classifier = ColumnClassifier::new();
        let values: Vec<RawValue> = (1..=20).map(|i| RawValue::from(i.to_string())).collect();
        let meta = classifier.classify(&values);
        match meta {
            ColumnMetadata::Numeric {
                buckets,
                min,
                median,
                max,
                nullable,
            } => {
                assert_eq!(buckets.len(), 11);
                assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
                assert_eq!(min, 1.0);
                assert_eq!(median, 10.5);
                assert_eq!(max, 20.0);
                assert!(!nullable);
            }
            other => panic!("expected numeric, got {:?}", other),
        }
    }

    #[test]
    fn test_textual_high_cardinality_non_numeric() {
        let classifier = ColumnClassifier::new();
        let values: Vec<RawValue> = (1..=20).map(|i| RawValue::from(format!("id_{}", i))).collect();
        let meta = classifier.classify(&values);
        assert_eq!(meta.meaning_type(), "textual");
    }

    #[test]
    fn test_unique_sample_truncation() {
        let classifier = ColumnClassifier::with_tunables(10, 5);
        let values: Vec<RawValue> = (1..=20).map(|i| RawValue::from(format!("v{}", i))).collect();
        let meta = classifier.classify(&values);
        match meta {
            ColumnMetadata::Textual {
                unique_values,
                number_of_unique_values,
                ..
            } => {
                assert_eq!(number_of_unique_values, 20);
                assert_eq!(unique_values.len(), 6);
                assert_eq!(
                    unique_values.last(),
                    Some(&RawValue::from(TRUNCATED_MARKER))
                );
            }
            other => panic!("expected textual, got {:?}", other),
        }
    }

    #[test]
    fn test_nullable_from_empty_string_and_null() {
        let classifier = ColumnClassifier::new();
        let meta = classifier.classify(&strings(&["a", "", "b"]));
        assert!(meta.nullable());

        let meta = classifier.classify(&[RawValue::from("a"), RawValue::Null]);
        assert!(meta.nullable());

        let meta = classifier.classify(&strings(&["a", "b"]));
        assert!(!meta.nullable());
    }

    #[test]
    fn test_numeric_with_nulls_excludes_them_from_stats() {
        let classifier = ColumnClassifier::new();
        let mut values: Vec<RawValue> =
            (1..=20).map(|i| RawValue::from(i.to_string())).collect();
        values.push(RawValue::Null);
        let meta = classifier.classify(&values);
        match meta {
            ColumnMetadata::Numeric { min, max, nullable, .. } => {
                assert_eq!(min, 1.0);
                assert_eq!(max, 20.0);
                assert!(nullable);
            }
            other => panic!("expected numeric, got {:?}", other),
        }
    }
}
