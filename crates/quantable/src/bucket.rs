//! Quantile boundaries and half-open interval labeling.
//!
//! Boundaries partition the real line into half-open intervals. A number
//! below the first boundary, at or above the last boundary, or between two
//! adjacent boundaries maps to exactly one label:
//!
//! ```text
//! x<10    10<=x<20    20<=x<30    30<=x
//! ```

/// Plotting positions for the quantile estimate; endpoints evaluate to the
/// exact min/max of the sample.
const ALPHAP: f64 = 0.4;
const BETAP: f64 = 0.4;

/// Compute `num_buckets + 1` quantile boundaries at equally spaced levels
/// from 0.0 to 1.0 inclusive, rounded to 2 decimal places.
///
/// Returns an empty list for an empty sample or `num_buckets == 0`.
pub fn quantiles(values: &[f64], num_buckets: usize) -> Vec<f64> {
    if values.is_empty() || num_buckets == 0 {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    (0..=num_buckets)
        .map(|i| {
            let p = i as f64 / num_buckets as f64;
            round2(mquantile(&sorted, p))
        })
        .collect()
}

/// A single quantile of a pre-sorted sample, using interpolated plotting
/// positions.
fn mquantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let m = ALPHAP + p * (1.0 - ALPHAP - BETAP);
    let aleph = n as f64 * p + m;
    let k = (aleph.floor() as i64).clamp(1, n as i64 - 1) as usize;
    let gamma = (aleph - k as f64).clamp(0.0, 1.0);
    (1.0 - gamma) * sorted[k - 1] + gamma * sorted[k]
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map each number to its half-open interval label.
///
/// With no boundaries every number maps to the unbounded label
/// `-inf<{label}<inf`. Boundaries are sorted ascending before use, so any
/// ordering may be supplied.
pub fn bucketize(numbers: &[f64], boundaries: &[f64], label: &str) -> Vec<String> {
    if boundaries.is_empty() {
        return numbers
            .iter()
            .map(|_| format!("-inf<{}<inf", label))
            .collect();
    }

    let mut sorted = boundaries.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    numbers
        .iter()
        .map(|&n| interval_label(n, &sorted, label))
        .collect()
}

/// The label for one number given sorted, non-empty boundaries.
///
/// Intervals are `boundary <= n < next boundary`; the lowest and highest
/// intervals are unbounded on the outside.
pub(crate) fn interval_label(number: f64, sorted_boundaries: &[f64], label: &str) -> String {
    let first = sorted_boundaries[0];
    let last = sorted_boundaries[sorted_boundaries.len() - 1];

    if number < first {
        return format!("{}<{}", label, first);
    }
    if number >= last {
        return format!("{}<={}", last, label);
    }

    for pair in sorted_boundaries.windows(2) {
        if number >= pair[0] && number < pair[1] {
            return format!("{}<={}<{}", pair[0], label, pair[1]);
        }
    }

    // Unreachable: first <= number < last guarantees an adjacent pair above.
    format!("-inf<{}<inf", label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucketize_interior_and_edges() {
        assert_eq!(
            bucketize(&[5.0, 15.0, 25.0], &[10.0, 20.0, 30.0], "x"),
            vec!["x<10", "10<=x<20", "20<=x<30"]
        );
    }

    #[test]
    fn test_bucketize_at_and_above_last_boundary() {
        assert_eq!(
            bucketize(&[30.0, 99.0], &[10.0, 20.0, 30.0], "x"),
            vec!["30<=x", "30<=x"]
        );
    }

    #[test]
    fn test_bucketize_on_boundary_goes_right() {
        assert_eq!(
            bucketize(&[10.0, 20.0], &[10.0, 20.0, 30.0], "x"),
            vec!["10<=x<20", "20<=x<30"]
        );
    }

    #[test]
    fn test_bucketize_empty_boundaries() {
        assert_eq!(
            bucketize(&[1.0, -7.5], &[], "age"),
            vec!["-inf<age<inf", "-inf<age<inf"]
        );
    }

    #[test]
    fn test_bucketize_sorts_boundaries_first() {
        assert_eq!(
            bucketize(&[15.0], &[30.0, 10.0, 20.0], "x"),
            vec!["10<=x<20"]
        );
    }

    #[test]
    fn test_quantiles_endpoints_are_min_and_max() {
        let bounds = quantiles(&[1.0, 2.0, 3.0, 4.0, 100.0], 4);
        assert_eq!(bounds.len(), 5);
        assert_eq!(bounds[0], 1.0);
        assert_eq!(bounds[4], 100.0);
        assert!(bounds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_quantiles_rounded_to_two_decimals() {
        let bounds = quantiles(&[1.0, 2.0, 3.0, 4.0, 100.0], 4);
        for b in &bounds {
            assert_eq!(*b, round2(*b));
        }
        // p = 0.25 lands between the first two sorted values.
        assert_eq!(bounds[1], 1.7);
    }

    #[test]
    fn test_quantiles_single_value() {
        assert_eq!(quantiles(&[42.0], 3), vec![42.0, 42.0, 42.0, 42.0]);
    }

    #[test]
    fn test_quantiles_empty_input() {
        assert!(quantiles(&[], 10).is_empty());
    }
}
