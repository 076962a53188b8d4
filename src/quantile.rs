use crate::errors::AnalyticsError;

/// Returns the `q`-th percentile (`0..=100`) of `values`, linearly
/// interpolating between the two nearest order statistics.
///
/// The input is copied and sorted numerically; the caller's slice is left
/// untouched. An empty sample fails with [`AnalyticsError::EmptyInput`].
pub fn quantile(values: &[f64], q: f64) -> Result<f64, AnalyticsError> {
    check_percentile(q)?;
    let sorted = sorted_sample(values)?;
    Ok(quantile_of_sorted(&sorted, q))
}

/// Evaluates several percentiles over one sorted copy of `values`.
pub fn quantiles(values: &[f64], qs: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    for &q in qs {
        check_percentile(q)?;
    }
    let sorted = sorted_sample(values)?;
    Ok(qs.iter().map(|&q| quantile_of_sorted(&sorted, q)).collect())
}

/// Percentiles of the strictly positive values, collapsed into a strictly
/// increasing boundary list. Zero days are excluded so that a mostly idle
/// series still spreads its active days over the colour range.
pub fn nonzero_thresholds(values: &[f64], qs: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    let active: Vec<f64> = values.iter().copied().filter(|value| *value > 0.0).collect();
    let mut thresholds = quantiles(&active, qs)?;
    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup();
    Ok(thresholds)
}

fn check_percentile(q: f64) -> Result<(), AnalyticsError> {
    if !q.is_finite() || !(0.0..=100.0).contains(&q) {
        return Err(AnalyticsError::invalid(format!(
            "percentile must be within [0, 100], got {q}"
        )));
    }
    Ok(())
}

fn sorted_sample(values: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }
    if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
        return Err(AnalyticsError::invalid(format!(
            "sample contains a non-finite value: {bad}"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn quantile_of_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * (q / 100.0);
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(next) => sorted[base] + rest * (next - sorted[base]),
        None => sorted[base],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 7] = [9.0, 1.0, 4.0, 4.0, 16.0, 0.0, 25.0];

    #[test]
    fn extremes_are_min_and_max() {
        assert_eq!(quantile(&SAMPLE, 0.0).unwrap(), 0.0);
        assert_eq!(quantile(&SAMPLE, 100.0).unwrap(), 25.0);
    }

    #[test]
    fn interpolates_between_order_statistics() {
        // sorted: 0 1 4 4 9 16 25, pos = 6 * 0.5 = 3
        assert_eq!(quantile(&SAMPLE, 50.0).unwrap(), 4.0);
        // pos = 6 * 0.75 = 4.5 -> 9 + 0.5 * 7
        assert_eq!(quantile(&SAMPLE, 75.0).unwrap(), 12.5);
        assert_eq!(quantile(&[1.0, 2.0], 25.0).unwrap(), 1.25);
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        // lexical order would put 10 before 9
        let values = [10.0, 9.0, 100.0];
        assert_eq!(quantile(&values, 50.0).unwrap(), 10.0);
    }

    #[test]
    fn permutation_does_not_change_result() {
        let mut reversed = SAMPLE;
        reversed.reverse();
        for q in [0.0, 10.0, 33.0, 50.0, 80.0, 100.0] {
            assert_eq!(quantile(&SAMPLE, q).unwrap(), quantile(&reversed, q).unwrap());
        }
    }

    #[test]
    fn monotonic_in_q() {
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=20 {
            let value = quantile(&SAMPLE, step as f64 * 5.0).unwrap();
            assert!(value >= previous, "q={} went backwards", step * 5);
            previous = value;
        }
    }

    #[test]
    fn single_value_sample() {
        assert_eq!(quantile(&[7.0], 0.0).unwrap(), 7.0);
        assert_eq!(quantile(&[7.0], 63.0).unwrap(), 7.0);
        assert_eq!(quantile(&[7.0], 100.0).unwrap(), 7.0);
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert_eq!(quantile(&[], 50.0), Err(AnalyticsError::EmptyInput));
    }

    #[test]
    fn out_of_range_percentile_is_rejected() {
        assert!(matches!(
            quantile(&SAMPLE, 100.5),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            quantile(&SAMPLE, -1.0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            quantile(&SAMPLE, f64::NAN),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_finite_sample_is_rejected() {
        assert!(matches!(
            quantile(&[1.0, f64::NAN], 50.0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn input_is_not_mutated() {
        let values = vec![3.0, 1.0, 2.0];
        quantile(&values, 50.0).unwrap();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn quantiles_matches_single_calls() {
        let qs = [20.0, 50.0, 80.0];
        let many = quantiles(&SAMPLE, &qs).unwrap();
        for (q, value) in qs.iter().zip(many) {
            assert_eq!(value, quantile(&SAMPLE, *q).unwrap());
        }
    }

    #[test]
    fn nonzero_thresholds_skip_idle_days_and_dedup() {
        let days = [0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 10.0];
        // active: 2 2 2 2 10 -> p20 = 2, p50 = 2, p80 = 2 + 0.2 * 8
        let thresholds = nonzero_thresholds(&days, &[20.0, 50.0, 80.0]).unwrap();
        assert_eq!(thresholds.len(), 2);
        assert_eq!(thresholds[0], 2.0);
        assert!((thresholds[1] - 3.6).abs() < 1e-9);
    }

    #[test]
    fn nonzero_thresholds_fail_on_idle_series() {
        assert_eq!(
            nonzero_thresholds(&[0.0, 0.0], &[50.0]),
            Err(AnalyticsError::EmptyInput)
        );
    }
}
