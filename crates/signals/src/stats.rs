//! Descriptive statistics over `f64` slices.
//!
//! Empty or undersized inputs produce NaN rather than an error, matching the
//! "insufficient history" convention used throughout the signal set.

/// Trading days per year used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean. NaN for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Covariance with an N divisor. NaN if the slices are empty or differ in length.
#[must_use]
pub fn population_covariance(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        return f64::NAN;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);
    let covariance: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    covariance / n
}

/// Variance with an N divisor.
///
/// Computed as the covariance of the series with itself so that
/// `population_covariance(x, x) / population_variance(x)` is exactly 1.
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    population_covariance(values, values)
}

/// Standard deviation with an N divisor.
#[must_use]
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Variance with an N-1 divisor. NaN for fewer than two values.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();

    #[allow(clippy::cast_precision_loss)]
    let dof = (values.len() - 1) as f64;
    sum_sq / dof
}

/// Standard deviation with an N-1 divisor.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn mean_calculates_correctly() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < EPS);
    }

    #[test]
    fn population_and_sample_variance_differ_by_divisor() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Sum of squared deviations is 32
        assert!((population_variance(&values) - 4.0).abs() < EPS);
        assert!((population_std(&values) - 2.0).abs() < EPS);
        assert!((sample_variance(&values) - 32.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn sample_variance_needs_two_points() {
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(sample_std(&[]).is_nan());
    }

    #[test]
    fn covariance_of_mismatched_lengths_is_nan() {
        assert!(population_covariance(&[1.0, 2.0], &[1.0]).is_nan());
        assert!(population_covariance(&[], &[]).is_nan());
    }

    #[test]
    fn covariance_of_perfectly_anticorrelated_series() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert!((population_covariance(&x, &y) + 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn constant_series_has_zero_variance() {
        assert_eq!(population_variance(&[0.0; 5]), 0.0);
        assert_eq!(sample_std(&[0.0; 5]), 0.0);
    }
}
