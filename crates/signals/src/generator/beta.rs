//! Beta of a stock's daily returns against a benchmark's.

use super::returns::daily_returns;
use crate::stats::{population_covariance, population_variance};
use rae_core::PriceHistory;

/// Default minimum daily returns each series needs.
pub const BETA_MIN_RETURNS: usize = 30;

/// `cov(stock, benchmark) / var(benchmark)` over right-aligned daily returns.
///
/// Both return series are truncated to their common trailing length; bars
/// are matched by position, not by date, so histories with different
/// calendar gaps are silently misaligned. Covariance and variance both use
/// the N divisor, which makes the beta of any non-constant series against
/// itself exactly 1.
///
/// NaN when either series has fewer than `min_returns` returns, the aligned
/// length is below 2, or the benchmark variance is zero.
#[must_use]
pub fn beta(history: &PriceHistory, benchmark: &PriceHistory, min_returns: usize) -> f64 {
    let stock = daily_returns(&history.closes());
    let bench = daily_returns(&benchmark.closes());

    let min_len = stock.len().min(bench.len());
    if min_len < min_returns {
        return f64::NAN;
    }

    let stock = &stock[stock.len() - min_len..];
    let bench = &bench[bench.len() - min_len..];

    if min_len < 2 {
        return f64::NAN;
    }

    let variance = population_variance(bench);
    if variance == 0.0 {
        return f64::NAN;
    }

    population_covariance(stock, bench) / variance
}
