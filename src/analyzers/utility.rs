use crate::analyzers::types::RatingStats;

/// Computes the arithmetic mean of a score series. Returns `None` for empty input.
pub fn mean(values: &[u8]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64)
}

/// Computes the sample (n - 1) standard deviation given a pre-computed mean.
/// A single value has a deviation of 0.0.
pub fn sample_stddev(values: &[u8], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    variance.sqrt()
}

/// Mean and sample standard deviation, or `None` when there is nothing to
/// summarize.
pub fn calculate_stats(values: &[u8]) -> Option<RatingStats> {
    let mean = mean(values)?;
    Some(RatingStats {
        mean,
        stddev: sample_stddev(values, mean),
        n: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_not_computable() {
        assert_eq!(mean(&[]), None);
        assert_eq!(calculate_stats(&[]), None);
    }

    #[test]
    fn test_single_value_has_zero_stddev() {
        let stats = calculate_stats(&[4]).unwrap();
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.n, 1);
    }

    #[test]
    fn test_sample_stddev() {
        let stats = calculate_stats(&[5, 3, 5]).unwrap();
        assert!((stats.mean - 4.333_333).abs() < 1e-5);
        assert!((stats.stddev - 1.154_700).abs() < 1e-5);
        assert_eq!(stats.n, 3);
    }

    #[test]
    fn test_two_values() {
        let stats = calculate_stats(&[1, 5]).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert!((stats.stddev - 8f64.sqrt()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn constant_series_has_zero_spread(k in 1u8..=5, n in 1usize..50) {
            let values = vec![k; n];
            let stats = calculate_stats(&values).unwrap();
            prop_assert!((stats.mean - f64::from(k)).abs() < 1e-9);
            prop_assert!(stats.stddev.abs() < 1e-9);
        }

        #[test]
        fn mean_stays_in_score_range(values in prop::collection::vec(1u8..=5, 1..100)) {
            let stats = calculate_stats(&values).unwrap();
            prop_assert!(stats.mean >= 1.0 && stats.mean <= 5.0);
            prop_assert!(stats.stddev >= 0.0);
            prop_assert_eq!(stats.n, values.len());
        }

        #[test]
        fn order_does_not_change_stats(mut values in prop::collection::vec(1u8..=5, 1..60)) {
            let before = calculate_stats(&values).unwrap();
            values.reverse();
            let after = calculate_stats(&values).unwrap();
            prop_assert!((before.mean - after.mean).abs() < 1e-9);
            prop_assert!((before.stddev - after.stddev).abs() < 1e-9);
        }
    }
}
