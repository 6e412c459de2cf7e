//! Annualized rolling volatility.

use super::returns::daily_returns;
use crate::stats::{population_std, TRADING_DAYS_PER_YEAR};
use rae_core::PriceHistory;

/// Default volatility window in trading days.
pub const VOLATILITY_WINDOW: usize = 30;

/// Standard deviation (N divisor) of the last `window` daily returns, times √252.
///
/// The result is on the scale of fractional returns; it is not multiplied
/// by 100 even though the signal is labelled as a percentage. NaN when the
/// history holds fewer than `window` bars.
#[must_use]
pub fn rolling_volatility(history: &PriceHistory, window: usize) -> f64 {
    if window == 0 || history.len() < window {
        return f64::NAN;
    }

    let returns = daily_returns(&history.closes());
    let recent = &returns[returns.len().saturating_sub(window)..];

    population_std(recent) * TRADING_DAYS_PER_YEAR.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn history(closes: &[f64]) -> PriceHistory {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        PriceHistory::from_series("TEST", start, closes, &vec![1.0; closes.len()]).unwrap()
    }

    fn alternating(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect()
    }

    #[test]
    fn nan_below_window() {
        let h = history(&alternating(VOLATILITY_WINDOW - 1));
        assert!(rolling_volatility(&h, VOLATILITY_WINDOW).is_nan());
    }

    #[test]
    fn defined_at_window_length() {
        let h = history(&alternating(VOLATILITY_WINDOW));
        let vol = rolling_volatility(&h, VOLATILITY_WINDOW);
        assert!(vol.is_finite());
        assert!(vol > 0.0);
    }

    #[test]
    fn flat_series_has_zero_volatility() {
        let h = history(&[42.0; 60]);
        assert_eq!(rolling_volatility(&h, VOLATILITY_WINDOW), 0.0);
    }

    #[test]
    fn uses_only_the_last_window_of_returns() {
        // Noisy first half, flat second half: only the flat part is in the window
        let mut closes = alternating(40);
        closes.extend(std::iter::repeat(100.0).take(40));
        let h = history(&closes);
        assert_eq!(rolling_volatility(&h, VOLATILITY_WINDOW), 0.0);
    }

    #[test]
    fn annualizes_population_std_without_percent_scaling() {
        let returns = [0.01, -0.01];
        let mut closes = vec![100.0];
        for r in returns {
            let last = *closes.last().unwrap();
            closes.push(last * (1.0 + r));
        }
        let h = history(&closes);

        // Population std of [+1%, -1%] is 0.01
        let expected = 0.01 * 252.0_f64.sqrt();
        assert!((rolling_volatility(&h, 3) - expected).abs() < 1e-9);
    }
}
