//! Cross-path summary statistics.
//!
//! Percentiles here use nearest-rank selection on the sorted sample rather
//! than linear interpolation, so results are always actual sample values.

/// Arithmetic mean. Returns `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N, not N - 1).
#[must_use]
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Sorts a copy of `values` in ascending order.
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Nearest-rank percentile over an already sorted slice.
///
/// The selected index is `floor(len * p)`, clamped to `len - 1`.
///
/// # Arguments
///
/// * `sorted_values` - Sample sorted in ascending order
/// * `p` - Percentile as a fraction (0.5 for the median, 0.95 for the 95th)
#[must_use]
pub fn nearest_rank_percentile(sorted_values: &[f64], p: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    let last = sorted_values.len() - 1;
    let idx = (sorted_values.len() as f64 * p).floor().max(0.0) as usize;
    Some(sorted_values[idx.min(last)])
}

/// Nearest-rank percentile over an unsorted sample.
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    nearest_rank_percentile(&sorted(values), p)
}

/// Percentage of values strictly greater than zero.
#[must_use]
pub fn share_positive_pct(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let positive = values.iter().filter(|&&x| x > 0.0).count();
    Some(positive as f64 / values.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), Some(5.0));
        // Population std of this classic sample is exactly 2.
        assert!((population_std(&values).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs_yield_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std(&[]), None);
        assert_eq!(percentile(&[], 0.5), None);
        assert_eq!(share_positive_pct(&[]), None);
    }

    #[test]
    fn test_nearest_rank_does_not_interpolate() {
        // Even count: floor(4 * 0.5) = 2 picks the upper middle value.
        assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 0.5), Some(3.0));
        // Odd count picks the true middle.
        assert_eq!(percentile(&[5.0, 1.0, 3.0], 0.5), Some(3.0));
    }

    #[test]
    fn test_nearest_rank_clamps_to_last_index() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        // floor(10 * 0.95) = 9, the last element.
        assert_eq!(percentile(&values, 0.95), Some(10.0));
        assert_eq!(percentile(&values, 1.0), Some(10.0));
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&[7.5], 0.95), Some(7.5));
    }

    #[test]
    fn test_sorting_tolerates_nan() {
        let values = sorted(&[3.0, f64::NAN, -1.0, 2.0]);
        assert_eq!(&values[..3], &[-1.0, 2.0, 3.0]);
        assert!(values[3].is_nan());
    }

    #[test]
    fn test_share_positive_excludes_zero() {
        let values = [-1.0, 0.0, 0.5, 2.0];
        assert_eq!(share_positive_pct(&values), Some(50.0));
    }
}
